// librc522/src/constants.rs
//! Common protocol constants used across the crate

/// ISO14443A request command, idle tags only (REQA).
pub const PICC_REQUEST_IDLE: u8 = 0x26;

/// ISO14443A request command, all tags including halted ones (WUPA).
pub const PICC_REQUEST_ALL: u8 = 0x52;

/// Cascade level 1 anti-collision / select command byte.
pub const PICC_ANTICOLL: u8 = 0x93;

/// NVB byte for the anti-collision phase: command + NVB sent, nothing known.
pub const PICC_ANTICOLL_NVB: u8 = 0x20;

/// NVB byte for the select phase: full UID known.
pub const PICC_SELECT_NVB: u8 = 0x70;

/// MIFARE authenticate with key A.
pub const PICC_AUTH_KEY_A: u8 = 0x60;

/// MIFARE authenticate with key B.
pub const PICC_AUTH_KEY_B: u8 = 0x61;

/// MIFARE 16-byte block read.
pub const PICC_READ: u8 = 0x30;

/// MIFARE 16-byte block write.
pub const PICC_WRITE: u8 = 0xA0;

/// Halt command byte; sent with a trailing 0x00 and CRC.
pub const PICC_HALT: u8 = 0x50;

/// 4-bit acknowledgment nibble a tag returns for an accepted write phase.
pub const MIFARE_ACK: u8 = 0x0A;

/// Bit length of the write acknowledgment.
pub const MIFARE_ACK_BITS: usize = 4;

/// Staging capacity for a single exchange. The largest frame is the write
/// payload phase: 16 data bytes plus the 2-byte CRC trailer.
pub const FRAME_CAPACITY: usize = 18;

/// MIFARE block payload length.
pub const BLOCK_LEN: usize = 16;

/// MIFARE sector key length.
pub const KEY_LEN: usize = 6;

/// UID length for a single-size (cascade level 1) tag.
pub const UID_SINGLE_LEN: usize = 4;

/// Largest UID the record type can carry (triple-size tags).
pub const UID_MAX_LEN: usize = 10;

/// Expected bit length of the ATQA answer to a request.
pub const ATQA_BITS: usize = 16;

/// Expected bit length of the select response (SAK + CRC).
pub const SAK_BITS: usize = 24;

/// Expected bit length of a block read response: 16 data bytes + CRC.
pub const READ_RESPONSE_BITS: usize = 144;

/// Scan records queued between the acquisition and display tasks.
pub const SCAN_QUEUE_CAPACITY: usize = 3;
