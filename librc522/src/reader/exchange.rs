// librc522/src/reader/exchange.rs

use log::{debug, trace};

use crate::bus::traits::RegisterBus;
use crate::protocol::frame::FrameBuffer;
use crate::reader::{Initialized, Reader};
use crate::registers::{bits, PcdCommand, Register};
use crate::utils::timeout::Deadline;
use crate::{Error, Result};

/// Outcome of a successful exchange: the drained response bytes and the
/// exact number of bits the receiver counted.
#[derive(Debug, Clone)]
pub struct Transceived {
    /// Response bytes drained from the FIFO.
    pub data: FrameBuffer,
    /// Exact received bit length; the last byte may be partial.
    pub bits: usize,
}

impl Transceived {
    /// The response bytes.
    pub fn as_slice(&self) -> &[u8] {
        self.data.as_slice()
    }
}

impl<B: RegisterBus> Reader<B, Initialized> {
    /// Run one command/response exchange through the reader.
    ///
    /// Arms the interrupt sources for `command`, clears pending flags,
    /// flushes the FIFO, stages `send`, triggers the command (raising
    /// StartSend for transceive) and polls the interrupt flags until the
    /// timer or a completion flag fires or the wait budget runs out. On
    /// completion the error register is inspected, a timer-only completion
    /// is reported as [`Error::NoTag`], and for transceive the FIFO is
    /// drained with the byte count clamped to the frame capacity.
    pub fn transceive(&mut self, command: PcdCommand, send: &[u8]) -> Result<Transceived> {
        let irq_enable = command.irq_enable_mask();
        let wait = command.wait_mask();

        let bus = self.bus_mut();
        bus.write_register(Register::CommIrqEnable, irq_enable | bits::IRQ_INV);
        bus.clear_bit_mask(Register::CommIrq, bits::IRQ_SET1);
        bus.set_bit_mask(Register::FifoLevel, bits::FLUSH_BUFFER);
        bus.write_register(Register::Command, PcdCommand::Idle.code());

        for &byte in send {
            bus.write_register(Register::FifoData, byte);
        }

        bus.write_register(Register::Command, command.code());
        if command == PcdCommand::Transceive {
            bus.set_bit_mask(Register::BitFraming, bits::START_SEND);
        }

        let deadline = Deadline::after(self.config.command_budget);
        let mut flags;
        let completed = loop {
            flags = self.bus_mut().read_register(Register::CommIrq);
            if flags & bits::TIMER_IRQ != 0 || flags & wait != 0 {
                break true;
            }
            if deadline.expired() {
                break false;
            }
        };

        self.bus_mut()
            .clear_bit_mask(Register::BitFraming, bits::START_SEND);

        if !completed {
            debug!("{:?} exchange exhausted the wait budget", command);
            return Err(Error::NoResponse);
        }

        let errors = self.bus_mut().read_register(Register::Error) & bits::PROTOCOL_ERRORS;
        if errors != 0 {
            debug!("{:?} exchange failed, error flags {:#04x}", command, errors);
            return Err(Error::ErrorFlags { flags: errors });
        }

        // Completion on the timer alone means an empty field, not a fault.
        if flags & irq_enable & bits::TIMER_IRQ != 0 {
            return Err(Error::NoTag);
        }

        let mut data = FrameBuffer::new();
        let mut bits_received = 0;
        if command == PcdCommand::Transceive {
            let bus = self.bus_mut();
            let mut count = bus.read_register(Register::FifoLevel) as usize;
            let last_bits = (bus.read_register(Register::Control) & bits::LAST_BITS_MASK) as usize;
            bits_received = if last_bits != 0 {
                count.saturating_sub(1) * 8 + last_bits
            } else {
                count * 8
            };
            // the FIFO may hold more than one frame's worth of bytes; never
            // drain past the staging capacity
            count = count.min(FrameBuffer::CAPACITY);
            for _ in 0..count {
                let byte = bus.read_register(Register::FifoData);
                data.push(byte)?;
            }
            trace!(
                "transceive response: {} bits, bytes {}",
                bits_received,
                crate::utils::bytes_to_hex_spaced(data.as_slice())
            );
        }

        Ok(Transceived {
            data,
            bits: bits_received,
        })
    }
}
