// Shared helper for the real-hardware tests: open and initialize a reader
// on the default Pi wiring, or report None on machines without one (CI).

use librc522::bus::rpi::{self, RpiRegisterBus};
use librc522::reader::{Initialized, Reader};

pub fn open_reader() -> Option<Reader<RpiRegisterBus, Initialized>> {
    let bus = rpi::open_default()?;
    Some(Reader::new(bus).initialize())
}
