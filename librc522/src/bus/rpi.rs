// librc522/src/bus/rpi.rs

//! Raspberry Pi implementations of the bus traits over rppal.
//!
//! The register framing holds chip-select across two SPI bytes, so the
//! select line must be a dedicated GPIO output wired to the reader's NSS pin
//! rather than the controller-managed CE line (configure the `Spi` instance
//! on a slave-select you leave unconnected). The indicator maps to any spare
//! GPIO output.

use log::warn;

use crate::bus::spi::SpiRegisterBus;
use crate::bus::traits::{ByteExchange, SelectLine};
use crate::tasks::display::Indicator;

impl ByteExchange for rppal::spi::Spi {
    fn exchange(&mut self, tx: u8) -> u8 {
        let mut rx = [0u8; 1];
        // the transport contract is infallible; a controller fault here is
        // not recoverable at this layer
        if let Err(e) = rppal::spi::Spi::transfer(self, &mut rx, &[tx]) {
            warn!("spi transfer failed: {}", e);
        }
        rx[0]
    }
}

impl SelectLine for rppal::gpio::OutputPin {
    fn assert(&mut self) {
        self.set_low();
    }

    fn release(&mut self) {
        self.set_high();
    }
}

impl Indicator for rppal::gpio::OutputPin {
    fn set(&mut self, on: bool) {
        if on {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// Register bus over the Pi's SPI controller and a GPIO select line.
pub type RpiRegisterBus = SpiRegisterBus<rppal::spi::Spi, rppal::gpio::OutputPin>;

/// Wire up a register bus from an opened SPI handle and select pin.
pub fn register_bus(spi: rppal::spi::Spi, select: rppal::gpio::OutputPin) -> RpiRegisterBus {
    SpiRegisterBus::new(spi, select)
}

/// BCM pin driving the reader's NSS line in the default wiring.
pub const DEFAULT_SELECT_PIN: u8 = 8;

/// Open the default wiring: SPI0 at 1 MHz (claiming CE1 so CE0/GPIO8 stays
/// free for the select line) and GPIO8 as NSS. Returns None on machines
/// without the SPI device or GPIO access, so tests and tools can skip
/// instead of failing.
pub fn open_default() -> Option<RpiRegisterBus> {
    use rppal::gpio::Gpio;
    use rppal::spi::{Bus, Mode, SlaveSelect, Spi};

    let spi = Spi::new(Bus::Spi0, SlaveSelect::Ss1, 1_000_000, Mode::Mode0).ok()?;
    let select = Gpio::new()
        .ok()?
        .get(DEFAULT_SELECT_PIN)
        .ok()?
        .into_output_high();
    Some(register_bus(spi, select))
}

/// Open a GPIO output to use as the detection indicator.
pub fn open_indicator(bcm_pin: u8) -> Option<rppal::gpio::OutputPin> {
    Some(rppal::gpio::Gpio::new().ok()?.get(bcm_pin).ok()?.into_output_low())
}
