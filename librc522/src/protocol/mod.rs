// librc522/src/protocol/mod.rs

//! Protocol-level building blocks: the bounded frame staging buffer and the
//! checksum helpers that guard responses.

pub mod checksum;
pub mod frame;

pub use checksum::{crc_a, uid_checksum};
pub use frame::FrameBuffer;
