// librc522/src/types.rs

use crate::constants::{BLOCK_LEN, KEY_LEN, UID_MAX_LEN, UID_SINGLE_LEN};
use crate::Error;
use std::convert::TryFrom;

/// Tag UID reported by anti-collision.
///
/// The buffer holds up to 10 bytes so double- and triple-size UIDs fit without
/// a layout change; the driver currently produces 4-byte (cascade level 1)
/// UIDs only. An empty UID means no tag was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid {
    bytes: [u8; UID_MAX_LEN],
    len: u8,
}

impl Uid {
    /// UID of a single-size tag.
    pub fn from_single(bytes: [u8; UID_SINGLE_LEN]) -> Self {
        let mut buf = [0u8; UID_MAX_LEN];
        buf[..UID_SINGLE_LEN].copy_from_slice(&bytes);
        Self {
            bytes: buf,
            len: UID_SINGLE_LEN as u8,
        }
    }

    /// The empty UID (no tag resolved).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Valid UID bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Number of valid UID bytes (0, 4, 7 or 10).
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// True when no tag was resolved.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Lowercase hex rendering for logs and presentation.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if !matches!(bytes.len(), 0 | 4 | 7 | 10) {
            return Err(Error::InvalidLength {
                expected: UID_SINGLE_LEN,
                actual: bytes.len(),
            });
        }
        let mut buf = [0u8; UID_MAX_LEN];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: buf,
            len: bytes.len() as u8,
        })
    }
}

/// Two-byte tag type (ATQA) returned by the request operation.
///
/// Known values for this family: 0x0400 = MIFARE Classic 1K, 0x0200 =
/// MIFARE Classic 4K, 0x4400 = MIFARE Ultralight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagType([u8; 2]);

impl TagType {
    /// Wrap the two answer bytes in wire order.
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// The raw answer bytes.
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// The answer as one value, first byte high.
    pub fn as_u16(&self) -> u16 {
        u16::from_be_bytes(self.0)
    }

    /// Lowercase hex rendering for logs and presentation.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }
}

impl TryFrom<&[u8]> for TagType {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 2 {
            return Err(Error::InvalidLength {
                expected: 2,
                actual: bytes.len(),
            });
        }
        Ok(Self([bytes[0], bytes[1]]))
    }
}

/// Six-byte MIFARE sector key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    /// Transport key of factory-fresh tags.
    pub const FACTORY: Self = Self([0xFF; KEY_LEN]);

    /// Wrap six key bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != KEY_LEN {
            return Err(Error::InvalidLength {
                expected: KEY_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; KEY_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// One 16-byte MIFARE block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; BLOCK_LEN]);

impl BlockData {
    /// Wrap a block payload.
    pub fn from_bytes(bytes: [u8; BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw block bytes.
    pub fn as_bytes(&self) -> &[u8; BLOCK_LEN] {
        &self.0
    }

    /// Spaced hex rendering for block dumps.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(&self.0)
    }

    /// Printable rendering with non-graphic bytes replaced by '.'.
    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != BLOCK_LEN {
            return Err(Error::InvalidLength {
                expected: BLOCK_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; BLOCK_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Outcome of one acquisition cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanStatus {
    /// Both request and anti-collision succeeded.
    Success,
    /// No tag detected, or a protocol step failed.
    #[default]
    Unsuccessful,
}

/// One detection result, built fresh each acquisition cycle and moved by
/// value into the scan queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanRecord {
    uid: Uid,
    tag_type: TagType,
    status: ScanStatus,
}

impl ScanRecord {
    /// Record for a detected tag.
    pub fn success(uid: Uid, tag_type: TagType) -> Self {
        Self {
            uid,
            tag_type,
            status: ScanStatus::Success,
        }
    }

    /// Record for a cycle that found no usable tag. The UID is forced empty
    /// regardless of what earlier protocol steps may have returned.
    pub fn unsuccessful(tag_type: TagType) -> Self {
        Self {
            uid: Uid::empty(),
            tag_type,
            status: ScanStatus::Unsuccessful,
        }
    }

    /// UID of the detected tag (empty when unsuccessful).
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Tag type bytes from the request answer.
    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    /// Cycle outcome.
    pub fn status(&self) -> ScanStatus {
        self.status
    }
}
