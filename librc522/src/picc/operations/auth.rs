// librc522/src/picc/operations/auth.rs

use crate::bus::traits::RegisterBus;
use crate::constants::UID_SINGLE_LEN;
use crate::picc::AuthKind;
use crate::protocol::frame::FrameBuffer;
use crate::reader::{Initialized, Reader};
use crate::registers::{bits, PcdCommand, Register};
use crate::types::{Key, Uid};
use crate::{Error, Result};

/// Run the Crypto1 handshake for `block`.
///
/// The frame carries the auth command, the block address, the six key bytes
/// and the first four UID bytes. A successful exchange is not enough: the
/// crypto-active status bit must be set afterwards, otherwise the handshake
/// did not take and the operation failed.
pub fn authenticate<B: RegisterBus>(
    reader: &mut Reader<B, Initialized>,
    kind: AuthKind,
    block: u8,
    key: &Key,
    uid: &Uid,
) -> Result<()> {
    if uid.len() < UID_SINGLE_LEN {
        return Err(Error::InvalidLength {
            expected: UID_SINGLE_LEN,
            actual: uid.len(),
        });
    }

    let mut frame = FrameBuffer::new();
    frame.push(kind.code())?;
    frame.push(block)?;
    frame.extend(key.as_bytes())?;
    frame.extend(&uid.as_bytes()[..UID_SINGLE_LEN])?;

    reader.transceive(PcdCommand::MfAuthent, frame.as_slice())?;

    if reader.bus_mut().read_register(Register::Status2) & bits::CRYPTO1_ON == 0 {
        return Err(Error::CryptoInactive);
    }
    Ok(())
}
