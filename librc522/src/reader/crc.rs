// librc522/src/reader/crc.rs

use crate::bus::traits::RegisterBus;
use crate::reader::{Initialized, Reader};
use crate::registers::{bits, PcdCommand, Register};
use crate::utils::timeout::Deadline;
use crate::{Error, Result};

impl<B: RegisterBus> Reader<B, Initialized> {
    /// Compute CRC_A over `data` in the reader's coprocessor, low byte first.
    ///
    /// Clears the CRC-done flag, flushes the FIFO, stages the input, starts
    /// the computation and polls the divider-interrupt register until the
    /// done flag is set or the CRC budget runs out.
    pub fn calculate_crc(&mut self, data: &[u8]) -> Result<[u8; 2]> {
        let bus = self.bus_mut();
        bus.clear_bit_mask(Register::DivIrq, bits::CRC_IRQ);
        bus.set_bit_mask(Register::FifoLevel, bits::FLUSH_BUFFER);

        for &byte in data {
            bus.write_register(Register::FifoData, byte);
        }
        bus.write_register(Register::Command, PcdCommand::CalcCrc.code());

        let deadline = Deadline::after(self.config.crc_budget);
        loop {
            if self.bus_mut().read_register(Register::DivIrq) & bits::CRC_IRQ != 0 {
                break;
            }
            if deadline.expired() {
                return Err(Error::NoResponse);
            }
        }

        let bus = self.bus_mut();
        Ok([
            bus.read_register(Register::CrcResultLow),
            bus.read_register(Register::CrcResultHigh),
        ])
    }
}
