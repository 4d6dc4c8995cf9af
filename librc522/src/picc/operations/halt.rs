// librc522/src/picc/operations/halt.rs

use crate::bus::traits::RegisterBus;
use crate::constants::PICC_HALT;
use crate::protocol::frame::FrameBuffer;
use crate::reader::{Initialized, Reader};
use crate::registers::PcdCommand;

/// Send the halt frame. The tag stops answering REQA either way, so the
/// exchange outcome is discarded.
pub fn halt<B: RegisterBus>(reader: &mut Reader<B, Initialized>) {
    let mut frame = FrameBuffer::new();
    if frame.extend(&[PICC_HALT, 0x00]).is_err() {
        return;
    }
    let Ok(crc) = reader.calculate_crc(frame.as_slice()) else {
        return;
    };
    if frame.extend(&crc).is_err() {
        return;
    }
    let _ = reader.transceive(PcdCommand::Transceive, frame.as_slice());
}
