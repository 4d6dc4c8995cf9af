// librc522/src/picc/operations/detect.rs

use std::convert::TryFrom;

use crate::bus::traits::RegisterBus;
use crate::constants::{ATQA_BITS, PICC_ANTICOLL, PICC_ANTICOLL_NVB, PICC_SELECT_NVB, SAK_BITS, UID_SINGLE_LEN};
use crate::picc::RequestMode;
use crate::protocol::checksum::uid_checksum;
use crate::protocol::frame::FrameBuffer;
use crate::reader::{Initialized, Reader};
use crate::registers::{bits, PcdCommand, Register};
use crate::types::{TagType, Uid};
use crate::{Error, Result};

/// Probe the field with a short 7-bit frame. A present tag answers with the
/// 16-bit ATQA; any other bit length is a protocol fault.
pub fn request<B: RegisterBus>(
    reader: &mut Reader<B, Initialized>,
    mode: RequestMode,
) -> Result<TagType> {
    reader
        .bus_mut()
        .write_register(Register::BitFraming, bits::SHORT_FRAME);

    let resp = reader.transceive(PcdCommand::Transceive, &[mode.code()])?;
    if resp.bits != ATQA_BITS {
        return Err(Error::InvalidBitCount {
            expected: ATQA_BITS,
            actual: resp.bits,
        });
    }
    TagType::try_from(resp.as_slice())
}

/// Resolve a single-size UID. The tag answers with four UID bytes and their
/// XOR check byte; a mismatched check byte means the response was corrupted
/// (or two tags collided below the detection threshold).
pub fn anticollision<B: RegisterBus>(reader: &mut Reader<B, Initialized>) -> Result<Uid> {
    reader.bus_mut().write_register(Register::BitFraming, 0x00);

    let resp = reader.transceive(PcdCommand::Transceive, &[PICC_ANTICOLL, PICC_ANTICOLL_NVB])?;
    let bytes = resp.as_slice();
    if bytes.len() != UID_SINGLE_LEN + 1 {
        return Err(Error::InvalidLength {
            expected: UID_SINGLE_LEN + 1,
            actual: bytes.len(),
        });
    }

    let expected = uid_checksum(&bytes[..UID_SINGLE_LEN]);
    let actual = bytes[UID_SINGLE_LEN];
    if actual != expected {
        return Err(Error::ChecksumMismatch { expected, actual });
    }

    Uid::try_from(&bytes[..UID_SINGLE_LEN])
}

/// Select the tag whose UID anti-collision resolved. The frame carries the
/// select command, the full-UID NVB, the UID with its check byte and a CRC
/// trailer; the tag answers with its SAK (24 bits including CRC), whose
/// first byte reports the capacity class.
pub fn select_tag<B: RegisterBus>(reader: &mut Reader<B, Initialized>, uid: &Uid) -> Result<u8> {
    if uid.len() < UID_SINGLE_LEN {
        return Err(Error::InvalidLength {
            expected: UID_SINGLE_LEN,
            actual: uid.len(),
        });
    }

    let mut frame = FrameBuffer::new();
    frame.push(PICC_ANTICOLL)?;
    frame.push(PICC_SELECT_NVB)?;
    frame.extend(&uid.as_bytes()[..UID_SINGLE_LEN])?;
    frame.push(uid_checksum(&uid.as_bytes()[..UID_SINGLE_LEN]))?;
    let crc = reader.calculate_crc(frame.as_slice())?;
    frame.extend(&crc)?;

    let resp = reader.transceive(PcdCommand::Transceive, frame.as_slice())?;
    if resp.bits != SAK_BITS {
        return Err(Error::InvalidBitCount {
            expected: SAK_BITS,
            actual: resp.bits,
        });
    }
    Ok(resp.as_slice()[0])
}
