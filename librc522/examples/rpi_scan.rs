// Continuous scan loop on a Raspberry Pi.

// Wiring (BCM numbering): SPI0 SCLK/MOSI/MISO to the reader, GPIO8 to NSS,
// and an LED on GPIO24 as the detection indicator. Build and run with
// `cargo run --example rpi_scan --features rpi`.

use std::time::Duration;

use anyhow::Context;
use librc522::bus::rpi;
use librc522::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let bus = rpi::open_default().context("no SPI device; is this a Pi with SPI enabled?")?;
    let indicator = rpi::open_indicator(24).context("cannot claim the indicator GPIO")?;

    let mut reader = Reader::new(bus).initialize();
    println!("reader version {:#04x}", reader.version());

    let (tx, rx) = scan_queue(3);
    let display = Display::new(rx, LogPresenter, indicator);
    let consumer = display.spawn()?;

    Acquisition::new(reader, tx)
        .with_interval(Duration::from_millis(2000))
        .run();

    consumer.join().ok();
    Ok(())
}
