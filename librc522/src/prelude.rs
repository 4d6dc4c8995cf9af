// librc522/src/prelude.rs

//! One-stop imports for driver consumers.

pub use crate::bus::{ByteExchange, RegisterBus, SelectLine, SpiRegisterBus};
pub use crate::picc::{AuthKind, RequestMode};
pub use crate::protocol::FrameBuffer;
pub use crate::reader::{Initialized, Reader, ReaderConfig, Transceived, Uninitialized};
pub use crate::registers::{PcdCommand, Register};
pub use crate::tasks::{
    scan_queue, Acquisition, Display, Indicator, LogPresenter, NullIndicator, Presenter,
    PublishResult, ScanConsumer, ScanProducer,
};
pub use crate::{BlockData, Error, Key, Result, ScanRecord, ScanStatus, TagType, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, Deadline};
