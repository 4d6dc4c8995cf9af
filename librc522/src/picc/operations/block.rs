// librc522/src/picc/operations/block.rs

use std::convert::TryFrom;

use crate::bus::traits::RegisterBus;
use crate::constants::{BLOCK_LEN, MIFARE_ACK, MIFARE_ACK_BITS, PICC_READ, PICC_WRITE, READ_RESPONSE_BITS};
use crate::protocol::frame::FrameBuffer;
use crate::reader::{Initialized, Reader, Transceived};
use crate::registers::PcdCommand;
use crate::types::BlockData;
use crate::{Error, Result};

/// Read one 16-byte block. The tag answers with the block payload followed
/// by a CRC, 144 bits total.
pub fn read_block<B: RegisterBus>(
    reader: &mut Reader<B, Initialized>,
    block: u8,
) -> Result<BlockData> {
    let mut frame = FrameBuffer::new();
    frame.extend(&[PICC_READ, block])?;
    let crc = reader.calculate_crc(frame.as_slice())?;
    frame.extend(&crc)?;

    let resp = reader.transceive(PcdCommand::Transceive, frame.as_slice())?;
    if resp.bits != READ_RESPONSE_BITS {
        return Err(Error::InvalidBitCount {
            expected: READ_RESPONSE_BITS,
            actual: resp.bits,
        });
    }
    BlockData::try_from(&resp.as_slice()[..BLOCK_LEN])
}

/// Write one 16-byte block.
///
/// Two exchanges, each gated on the 4-bit ACK nibble: the command phase
/// announces the block address, and only an acknowledged command phase is
/// followed by the payload phase.
pub fn write_block<B: RegisterBus>(
    reader: &mut Reader<B, Initialized>,
    block: u8,
    data: &BlockData,
) -> Result<()> {
    let mut frame = FrameBuffer::new();
    frame.extend(&[PICC_WRITE, block])?;
    let crc = reader.calculate_crc(frame.as_slice())?;
    frame.extend(&crc)?;

    let resp = reader.transceive(PcdCommand::Transceive, frame.as_slice())?;
    expect_ack(&resp)?;

    let mut payload = FrameBuffer::new();
    payload.extend(data.as_bytes())?;
    let crc = reader.calculate_crc(payload.as_slice())?;
    payload.extend(&crc)?;

    let resp = reader.transceive(PcdCommand::Transceive, payload.as_slice())?;
    expect_ack(&resp)
}

fn expect_ack(resp: &Transceived) -> Result<()> {
    if resp.bits != MIFARE_ACK_BITS {
        return Err(Error::InvalidBitCount {
            expected: MIFARE_ACK_BITS,
            actual: resp.bits,
        });
    }
    let nibble = resp.as_slice().first().copied().unwrap_or(0) & 0x0F;
    if nibble != MIFARE_ACK {
        return Err(Error::Nack { response: nibble });
    }
    Ok(())
}
