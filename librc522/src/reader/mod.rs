// librc522/src/reader/mod.rs

//! The reader context object: owns the register bus and the wait budgets,
//! and enforces initialization at the type level.

mod crc;
mod exchange;

pub use exchange::Transceived;

use std::marker::PhantomData;
use std::time::Duration;

use log::debug;

use crate::bus::traits::RegisterBus;
use crate::registers::{bits, PcdCommand, Register};
use crate::utils::timeout::{ms, DEFAULT_COMMAND_BUDGET_MS, DEFAULT_CRC_BUDGET_MS};

/// Type-state marker: the reader has not been configured yet.
pub struct Uninitialized;

/// Type-state marker: the init sequence ran; card operations are available.
pub struct Initialized;

/// Wait budgets for the bounded polling loops.
///
/// Budgets are wall-clock durations, so the polling behavior does not depend
/// on how fast the host drives the bus.
#[derive(Debug, Clone, Copy)]
pub struct ReaderConfig {
    /// Budget for one command/response exchange.
    pub command_budget: Duration,
    /// Budget for one hardware CRC computation.
    pub crc_budget: Duration,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            command_budget: ms(DEFAULT_COMMAND_BUDGET_MS),
            crc_budget: ms(DEFAULT_CRC_BUDGET_MS),
        }
    }
}

/// Reader handle, generic over the register bus and the initialization state.
///
/// Card operations only exist on `Reader<_, Initialized>`, so forgetting the
/// init sequence is a compile error rather than a silent protocol failure.
pub struct Reader<B, State = Uninitialized> {
    bus: B,
    config: ReaderConfig,
    _state: PhantomData<State>,
}

impl<B: RegisterBus> Reader<B, Uninitialized> {
    /// Wrap a register bus with the default wait budgets.
    pub fn new(bus: B) -> Self {
        Self::with_config(bus, ReaderConfig::default())
    }

    /// Wrap a register bus with explicit wait budgets.
    pub fn with_config(bus: B, config: ReaderConfig) -> Self {
        Self {
            bus,
            config,
            _state: PhantomData,
        }
    }

    /// Run the power-up sequence and hand back an operational reader.
    ///
    /// Soft reset, then the timer (prescaler 0x3E, reload 30: ~24 ms until
    /// the no-response timeout fires), forced 100% ASK modulation and the
    /// 0x6363 CRC preset, then the antenna drivers.
    pub fn initialize(mut self) -> Reader<B, Initialized> {
        self.bus
            .write_register(Register::Command, PcdCommand::SoftReset.code());

        self.bus.write_register(Register::TMode, 0x8D);
        self.bus.write_register(Register::TPrescaler, 0x3E);
        self.bus.write_register(Register::TReloadLow, 30);
        self.bus.write_register(Register::TReloadHigh, 0);

        self.bus.write_register(Register::TxAsk, 0x40);
        self.bus.write_register(Register::Mode, 0x3D);

        let mut reader = Reader {
            bus: self.bus,
            config: self.config,
            _state: PhantomData,
        };
        reader.antenna_on();

        let version = reader.bus.read_register(Register::Version);
        debug!("reader initialized, chip version {:#04x}", version);
        reader
    }
}

impl<B: RegisterBus> Reader<B, Initialized> {
    /// Enable the antenna drivers if they are off.
    pub fn antenna_on(&mut self) {
        let current = self.bus.read_register(Register::TxControl);
        if current & bits::ANTENNA_ON != bits::ANTENNA_ON {
            self.bus.set_bit_mask(Register::TxControl, bits::ANTENNA_ON);
        }
    }

    /// Disable the antenna drivers.
    pub fn antenna_off(&mut self) {
        self.bus
            .clear_bit_mask(Register::TxControl, bits::ANTENNA_ON);
    }

    /// Chip version byte, useful as a bring-up sanity check.
    pub fn version(&mut self) -> u8 {
        self.bus.read_register(Register::Version)
    }

    /// The configured wait budgets.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// The underlying register bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutable access to the underlying register bus.
    pub(crate) fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Give the bus back, e.g. to inspect a mock after a test run.
    pub fn into_bus(self) -> B {
        self.bus
    }
}
