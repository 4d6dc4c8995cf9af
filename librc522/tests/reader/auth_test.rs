#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use librc522::bus::MockExchange;
use librc522::prelude::*;
use librc522::test_support::initialized_mock_reader;

#[test]
fn authenticate_succeeds_when_the_crypto_unit_comes_up() {
    let mut reader =
        initialized_mock_reader(vec![MockExchange::reply(&[]).with_crypto(true)]);
    let uid = Uid::from_single(fixtures::SAMPLE_UID);
    reader
        .authenticate(AuthKind::KeyA, 0x08, &Key::FACTORY, &uid)
        .unwrap();
}

#[test]
fn authenticate_fails_on_a_clean_exchange_with_the_crypto_bit_clear() {
    // the exchange itself reports success; only the status bit is missing
    let mut reader =
        initialized_mock_reader(vec![MockExchange::reply(&[]).with_crypto(false)]);
    let uid = Uid::from_single(fixtures::SAMPLE_UID);
    match reader.authenticate(AuthKind::KeyA, 0x08, &Key::FACTORY, &uid) {
        Err(Error::CryptoInactive) => {}
        other => panic!("expected CryptoInactive, got {:?}", other),
    }
}

#[test]
fn timer_expiry_without_crypto_reports_failure() {
    // the timer interrupt is not armed for authenticate, so a timed-out
    // handshake surfaces through the missing crypto bit, not as NoTag
    let mut reader = initialized_mock_reader(vec![MockExchange::timer_expired()]);
    let uid = Uid::from_single(fixtures::SAMPLE_UID);
    match reader.authenticate(AuthKind::KeyA, 0x08, &Key::FACTORY, &uid) {
        Err(Error::CryptoInactive) => {}
        other => panic!("expected CryptoInactive, got {:?}", other),
    }
}

#[test]
fn authenticate_frames_mode_block_key_and_uid() {
    let mut reader =
        initialized_mock_reader(vec![MockExchange::reply(&[]).with_crypto(true)]);
    let uid = Uid::from_single(fixtures::SAMPLE_UID);
    let key = Key::from_bytes([0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5]);
    reader.authenticate(AuthKind::KeyB, 0x12, &key, &uid).unwrap();

    let mock = reader.into_bus();
    let mut expected = vec![0x61, 0x12];
    expected.extend_from_slice(key.as_bytes());
    expected.extend_from_slice(&fixtures::SAMPLE_UID);
    assert_eq!(mock.sent[0].bytes, expected);
    assert_eq!(mock.sent[0].bytes.len(), 12);
    assert_eq!(mock.sent[0].command, 0x0E);
}

#[test]
fn authenticate_requires_a_resolved_uid() {
    let mut reader = initialized_mock_reader(vec![]);
    assert!(matches!(
        reader.authenticate(AuthKind::KeyA, 0x00, &Key::FACTORY, &Uid::empty()),
        Err(Error::InvalidLength { .. })
    ));
}
