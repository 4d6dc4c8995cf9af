// librc522/src/error.rs

use thiserror::Error;

/// Driver-wide error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The reader never raised a completion flag within the wait budget.
    #[error("no response from reader within the wait budget")]
    NoResponse,

    /// The exchange completed on the timer alone: the field is empty, the
    /// reader itself is healthy.
    #[error("no tag in the field")]
    NoTag,

    /// One or more of the error-register bits the driver checks
    /// (buffer overflow, collision, CRC, protocol) was set.
    #[error("reader error flags: {flags:#04x}")]
    ErrorFlags { flags: u8 },

    /// The response carried an unexpected number of bits.
    #[error("invalid response length: expected {expected} bits, got {actual}")]
    InvalidBitCount { expected: usize, actual: usize },

    /// The anti-collision check byte did not match the UID bytes.
    #[error("uid checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    /// The tag answered a write phase with something other than the ACK nibble.
    #[error("tag rejected the write: ack nibble {response:#03x}")]
    Nack { response: u8 },

    /// The exchange reported success but the crypto-active status bit stayed
    /// clear, so the authentication did not actually take.
    #[error("authentication did not activate the crypto unit")]
    CryptoInactive,

    /// A staged frame would exceed the bounded frame capacity.
    #[error("frame overflow: {requested} bytes exceed capacity {capacity}")]
    FrameOverflow { requested: usize, capacity: usize },

    /// A byte slice had the wrong length for the target type.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
