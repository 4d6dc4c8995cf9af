#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use librc522::bus::MockExchange;
use librc522::prelude::*;
use librc522::protocol::crc_a;
use librc522::test_support::initialized_mock_reader;

#[test]
fn read_returns_the_16_payload_bytes() {
    let mut reader = initialized_mock_reader(vec![MockExchange::reply(&fixtures::read_reply(0x5A))]);
    let block = reader.read_block(0x08).unwrap();
    assert_eq!(block.as_bytes(), &[0x5A; 16]);
}

#[test]
fn read_sends_command_address_and_crc() {
    let mut reader = initialized_mock_reader(vec![MockExchange::reply(&fixtures::read_reply(0x00))]);
    reader.read_block(0x1B).unwrap();
    let mock = reader.into_bus();
    let mut expected = vec![0x30, 0x1B];
    let crc = crc_a(&expected);
    expected.extend_from_slice(&crc);
    assert_eq!(mock.sent[0].bytes, expected);
}

#[test]
fn read_rejects_an_answer_that_is_not_144_bits() {
    let short = vec![0x00u8; 17];
    let mut reader = initialized_mock_reader(vec![MockExchange::reply(&short)]);
    assert!(matches!(
        reader.read_block(0x08),
        Err(Error::InvalidBitCount {
            expected: 144,
            actual: 136
        })
    ));
}

#[test]
fn write_requires_the_ack_in_both_phases() {
    let data = BlockData::from_bytes([0xC3; 16]);
    let mut reader =
        initialized_mock_reader(vec![fixtures::ack_exchange(), fixtures::ack_exchange()]);
    reader.write_block(0x09, &data).unwrap();

    let mock = reader.into_bus();
    assert_eq!(mock.sent.len(), 2);

    // command phase: write command, address, CRC
    let mut phase1 = vec![0xA0, 0x09];
    let crc = crc_a(&phase1);
    phase1.extend_from_slice(&crc);
    assert_eq!(mock.sent[0].bytes, phase1);

    // payload phase: 16 data bytes, CRC
    let mut phase2 = vec![0xC3; 16];
    let crc = crc_a(&phase2);
    phase2.extend_from_slice(&crc);
    assert_eq!(mock.sent[1].bytes, phase2);
    assert_eq!(mock.sent[1].bytes.len(), 18);
}

#[test]
fn nack_in_the_command_phase_skips_the_payload_phase() {
    let data = BlockData::from_bytes([0xC3; 16]);
    let mut reader = initialized_mock_reader(vec![fixtures::nack_exchange()]);
    match reader.write_block(0x09, &data) {
        Err(Error::Nack { response: 0x05 }) => {}
        other => panic!("expected Nack, got {:?}", other),
    }
    // only the command phase ever reached the air interface
    assert_eq!(reader.into_bus().sent.len(), 1);
}

#[test]
fn wrong_ack_bit_length_fails_the_command_phase() {
    // a full-byte 0x0A is not the 4-bit ACK
    let data = BlockData::from_bytes([0x00; 16]);
    let mut reader = initialized_mock_reader(vec![MockExchange::reply(&[0x0A])]);
    match reader.write_block(0x04, &data) {
        Err(Error::InvalidBitCount {
            expected: 4,
            actual: 8,
        }) => {}
        other => panic!("expected InvalidBitCount, got {:?}", other),
    }
    assert_eq!(reader.into_bus().sent.len(), 1);
}

#[test]
fn nack_in_the_payload_phase_fails_the_write() {
    let data = BlockData::from_bytes([0xC3; 16]);
    let mut reader =
        initialized_mock_reader(vec![fixtures::ack_exchange(), fixtures::nack_exchange()]);
    assert!(matches!(
        reader.write_block(0x09, &data),
        Err(Error::Nack { response: 0x05 })
    ));
    assert_eq!(reader.into_bus().sent.len(), 2);
}

#[test]
fn halt_sends_its_frame_and_ignores_the_outcome() {
    // no scripted exchange: the tag never acknowledges a halt
    let mut reader = initialized_mock_reader(vec![]);
    reader.halt();

    let mock = reader.into_bus();
    let mut expected = vec![0x50, 0x00];
    let crc = crc_a(&expected);
    expected.extend_from_slice(&crc);
    assert_eq!(mock.sent[0].bytes, expected);
}
