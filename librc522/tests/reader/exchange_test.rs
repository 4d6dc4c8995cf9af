use librc522::bus::MockExchange;
use librc522::prelude::*;
use librc522::registers::Register;
use librc522::test_support::initialized_mock_reader;

#[test]
fn transceive_arms_the_transceive_interrupt_sources() {
    let mut reader = initialized_mock_reader(vec![MockExchange::reply(&[0x04, 0x00])]);
    reader.transceive(PcdCommand::Transceive, &[0x26]).unwrap();
    let mock = reader.into_bus();
    // 0x77 armed, plus the IRq inversion bit the driver always sets
    assert_eq!(mock.register(Register::CommIrqEnable), 0xF7);
}

#[test]
fn start_send_is_cleared_after_the_exchange() {
    let mut reader = initialized_mock_reader(vec![MockExchange::reply(&[])]);
    reader.transceive(PcdCommand::Transceive, &[0x26]).unwrap();
    let mock = reader.into_bus();
    assert_eq!(mock.register(Register::BitFraming) & 0x80, 0);
}

#[test]
fn silent_reader_reports_no_response() {
    let mut reader = initialized_mock_reader(vec![]);
    match reader.transceive(PcdCommand::Transceive, &[0x26]) {
        Err(Error::NoResponse) => {}
        other => panic!("expected NoResponse, got {:?}", other),
    }
}

#[test]
fn empty_field_reports_no_tag_not_a_fault() {
    let mut reader = initialized_mock_reader(vec![MockExchange::timer_expired()]);
    match reader.transceive(PcdCommand::Transceive, &[0x26]) {
        Err(Error::NoTag) => {}
        other => panic!("expected NoTag, got {:?}", other),
    }
}

#[test]
fn collision_flag_fails_the_exchange() {
    let mut reader = initialized_mock_reader(vec![MockExchange::error(0x08)]);
    match reader.transceive(PcdCommand::Transceive, &[0x93, 0x20]) {
        Err(Error::ErrorFlags { flags: 0x08 }) => {}
        other => panic!("expected ErrorFlags, got {:?}", other),
    }
}

#[test]
fn response_bytes_and_bit_length_are_exact() {
    let mut reader = initialized_mock_reader(vec![
        MockExchange::reply(&[0xAA, 0xBB, 0xCC]),
        MockExchange::reply(&[0x0A]).with_last_bits(4),
    ]);

    let full = reader.transceive(PcdCommand::Transceive, &[0x30, 0x00]).unwrap();
    assert_eq!(full.as_slice(), &[0xAA, 0xBB, 0xCC]);
    assert_eq!(full.bits, 24);

    let partial = reader.transceive(PcdCommand::Transceive, &[0xA0, 0x00]).unwrap();
    assert_eq!(partial.bits, 4);
}

#[test]
fn fifo_drain_never_exceeds_the_frame_capacity() {
    let mut reader = initialized_mock_reader(vec![MockExchange::reply(&[0x77; 40])]);
    let resp = reader.transceive(PcdCommand::Transceive, &[0x30, 0x01]).unwrap();
    assert_eq!(resp.as_slice().len(), FrameBuffer::CAPACITY);
}
