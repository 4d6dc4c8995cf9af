// Host-runnable pipeline demo over the register-level mock device.

// Scripts three acquisition cycles (hit, miss, hit), runs the acquisition
// task on its own thread and services the display side on this one. No
// hardware required; run with RUST_LOG=debug to watch the exchanges.

use std::time::Duration;

use librc522::bus::{MockDevice, MockExchange};
use librc522::prelude::*;
use librc522::protocol::uid_checksum;

struct PrintlnPresenter;

impl Presenter for PrintlnPresenter {
    fn present(&mut self, record: &ScanRecord) {
        match record.status() {
            ScanStatus::Success => println!(
                "tag/card {}  type {}  status: success",
                record.uid().to_hex(),
                record.tag_type().to_hex()
            ),
            ScanStatus::Unsuccessful => println!("tag/card not detected"),
        }
    }
}

fn detection(mock: &mut MockDevice, uid: [u8; 4]) {
    mock.push_exchange(MockExchange::reply(&[0x04, 0x00]));
    let mut serial = uid.to_vec();
    serial.push(uid_checksum(&uid));
    mock.push_exchange(MockExchange::reply(&serial));
}

fn miss(mock: &mut MockDevice) {
    mock.push_exchange(MockExchange::timer_expired());
    mock.push_exchange(MockExchange::timer_expired());
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut mock = MockDevice::new();
    detection(&mut mock, [0x11, 0x22, 0x33, 0x44]);
    miss(&mut mock);
    detection(&mut mock, [0xDE, 0xAD, 0xBE, 0xEF]);

    let reader = Reader::new(mock).initialize();
    let (tx, rx) = scan_queue(3);

    let acquisition =
        Acquisition::new(reader, tx).with_interval(Duration::from_millis(100));
    let producer = acquisition.spawn()?;

    let mut display = Display::new(rx, PrintlnPresenter, NullIndicator);
    for _ in 0..3 {
        if !display.service_one() {
            break;
        }
    }

    // closing the queue stops the acquisition loop
    drop(display);
    producer.join().ok();
    Ok(())
}
