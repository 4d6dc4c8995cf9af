// librc522/src/bus/mock.rs

use std::collections::VecDeque;

use crate::bus::traits::RegisterBus;
use crate::protocol::checksum::crc_a;
use crate::registers::{bits, PcdCommand, Register};

/// Register-level reader simulator for unit tests.
///
/// The mock models the pieces of the register machine the driver talks to:
/// the FIFO, the interrupt flags (write-1-to-clear with the Set1/Set2 marker
/// bit, as on the device), the error register, the crypto-active status bit
/// and a CRC coprocessor that runs the real CRC_A. Air-interface behavior is
/// scripted: each queued [`MockExchange`] answers one transceive/authenticate
/// command; with no script queued the reader stays silent and the caller's
/// wait budget expires.
///
/// Frames the driver transmits are captured in [`sent`](Self::sent) at
/// command-issue time, together with the bit framing in effect.
#[derive(Debug)]
pub struct MockDevice {
    regs: [u8; 0x40],
    fifo: VecDeque<u8>,
    exchanges: VecDeque<MockExchange>,
    /// Frames captured when a transceive/authenticate command was issued.
    pub sent: Vec<SentFrame>,
}

impl Default for MockDevice {
    fn default() -> Self {
        Self::new()
    }
}

/// One frame captured from the mock's FIFO at command-issue time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentFrame {
    /// Raw command code written to the command register.
    pub command: u8,
    /// FIFO contents staged for the exchange.
    pub bytes: Vec<u8>,
    /// Low three bits of the bit-framing register (0 = full bytes).
    pub tx_last_bits: u8,
}

/// Scripted answer to one transceive/authenticate command.
#[derive(Debug, Clone)]
pub struct MockExchange {
    reply: Vec<u8>,
    last_bits: u8,
    irq: u8,
    error_flags: u8,
    crypto_active: Option<bool>,
}

impl MockExchange {
    /// A full-byte reply; completion flags are raised as for a received
    /// response.
    pub fn reply(bytes: &[u8]) -> Self {
        Self {
            reply: bytes.to_vec(),
            last_bits: 0,
            irq: 0x30,
            error_flags: 0,
            crypto_active: None,
        }
    }

    /// Mark the last reply byte as carrying only `bits` valid bits.
    pub fn with_last_bits(mut self, bits: u8) -> Self {
        self.last_bits = bits & 0x07;
        self
    }

    /// Set or clear the crypto-active status bit after the exchange.
    pub fn with_crypto(mut self, active: bool) -> Self {
        self.crypto_active = Some(active);
        self
    }

    /// The reader's timer expired with nothing received: the empty-field
    /// answer.
    pub fn timer_expired() -> Self {
        Self {
            reply: Vec::new(),
            last_bits: 0,
            irq: bits::TIMER_IRQ,
            error_flags: 0,
            crypto_active: None,
        }
    }

    /// No completion flag at all; the caller's wait budget will expire.
    pub fn silence() -> Self {
        Self {
            reply: Vec::new(),
            last_bits: 0,
            irq: 0,
            error_flags: 0,
            crypto_active: None,
        }
    }

    /// Completion with the given error-register flags set.
    pub fn error(flags: u8) -> Self {
        Self {
            reply: Vec::new(),
            last_bits: 0,
            irq: 0x30,
            error_flags: flags,
            crypto_active: None,
        }
    }
}

impl MockDevice {
    /// A fresh mock with an empty script.
    pub fn new() -> Self {
        let mut regs = [0u8; 0x40];
        regs[Register::Version.addr() as usize] = 0x92;
        Self {
            regs,
            fifo: VecDeque::new(),
            exchanges: VecDeque::new(),
            sent: Vec::new(),
        }
    }

    /// Queue a scripted answer for the next transceive/authenticate command.
    pub fn push_exchange(&mut self, exchange: MockExchange) {
        self.exchanges.push_back(exchange);
    }

    /// Bytes currently in the FIFO.
    pub fn fifo_len(&self) -> usize {
        self.fifo.len()
    }

    /// Raw register cell, for assertions on configuration writes.
    pub fn register(&self, reg: Register) -> u8 {
        self.regs[reg.addr() as usize]
    }

    /// Force a register cell, for tests that need a precise starting state.
    pub fn set_register(&mut self, reg: Register, value: u8) {
        self.regs[reg.addr() as usize] = value;
    }

    fn run_command(&mut self, code: u8) {
        if code == PcdCommand::SoftReset.code() {
            self.fifo.clear();
            self.regs = [0u8; 0x40];
            self.regs[Register::Version.addr() as usize] = 0x92;
            return;
        }

        if code == PcdCommand::CalcCrc.code() {
            let data: Vec<u8> = self.fifo.drain(..).collect();
            let crc = crc_a(&data);
            self.regs[Register::CrcResultLow.addr() as usize] = crc[0];
            self.regs[Register::CrcResultHigh.addr() as usize] = crc[1];
            self.regs[Register::DivIrq.addr() as usize] |= bits::CRC_IRQ;
            return;
        }

        if code == PcdCommand::Transceive.code() || code == PcdCommand::MfAuthent.code() {
            let bytes: Vec<u8> = self.fifo.drain(..).collect();
            let tx_last_bits = self.regs[Register::BitFraming.addr() as usize] & 0x07;
            self.sent.push(SentFrame {
                command: code,
                bytes,
                tx_last_bits,
            });

            if let Some(exchange) = self.exchanges.pop_front() {
                self.regs[Register::Error.addr() as usize] = exchange.error_flags;
                self.regs[Register::Control.addr() as usize] = exchange.last_bits;
                self.fifo.extend(exchange.reply.iter().copied());
                self.regs[Register::CommIrq.addr() as usize] |= exchange.irq;
                if let Some(active) = exchange.crypto_active {
                    let status2 = &mut self.regs[Register::Status2.addr() as usize];
                    if active {
                        *status2 |= bits::CRYPTO1_ON;
                    } else {
                        *status2 &= !bits::CRYPTO1_ON;
                    }
                }
            }
        }
        // Idle and unknown codes: nothing to simulate.
    }

    /// Interrupt-flag registers: writes with the marker bit clear clear the
    /// flagged bits, writes with it set raise them.
    fn write_irq_flags(&mut self, reg: Register, value: u8) {
        let cell = &mut self.regs[reg.addr() as usize];
        if value & 0x80 != 0 {
            *cell |= value & 0x7F;
        } else {
            *cell &= !value;
        }
    }
}

impl RegisterBus for MockDevice {
    fn read_register(&mut self, reg: Register) -> u8 {
        match reg {
            Register::FifoData => self.fifo.pop_front().unwrap_or(0),
            Register::FifoLevel => self.fifo.len() as u8,
            _ => self.regs[reg.addr() as usize],
        }
    }

    fn write_register(&mut self, reg: Register, value: u8) {
        match reg {
            Register::FifoData => self.fifo.push_back(value),
            Register::FifoLevel => {
                if value & bits::FLUSH_BUFFER != 0 {
                    self.fifo.clear();
                }
            }
            Register::CommIrq | Register::DivIrq => self.write_irq_flags(reg, value),
            Register::Command => {
                self.regs[reg.addr() as usize] = value;
                self.run_command(value);
            }
            _ => self.regs[reg.addr() as usize] = value,
        }
    }
}
