use librc522::protocol::{crc_a, uid_checksum};
use librc522::test_support::initialized_mock_reader;
use proptest::prelude::*;

#[test]
fn crc_a_known_check_value() {
    assert_eq!(crc_a(b"123456789"), [0x05, 0xBF]);
}

#[test]
fn hardware_crc_agrees_with_the_reference_for_every_command_frame() {
    let mut reader = initialized_mock_reader(vec![]);
    for frame in [
        &[0x50u8, 0x00][..], // halt
        &[0x30, 0x08],       // read block 8
        &[0xA0, 0x08],       // write command phase
        &[0x93, 0x70, 0x11, 0x22, 0x33, 0x44, 0x44], // select
    ] {
        assert_eq!(reader.calculate_crc(frame).unwrap(), crc_a(frame));
    }
}

#[test]
fn uid_checksum_is_the_xor_of_the_uid_bytes() {
    assert_eq!(uid_checksum(&[0x11, 0x22, 0x33, 0x44]), 0x44);
    assert_eq!(uid_checksum(&[0x9A, 0x9A, 0x00, 0x00]), 0x00);
}

proptest! {
    #[test]
    fn uid_checksum_detects_any_single_byte_corruption(
        uid in prop::array::uniform4(any::<u8>()),
        index in 0usize..4,
        flip in 1u8..=255,
    ) {
        let mut corrupted = uid;
        corrupted[index] ^= flip;
        prop_assert_ne!(uid_checksum(&uid) ^ uid_checksum(&corrupted), 0);
    }

    #[test]
    fn hardware_crc_matches_reference_for_any_frame(
        data in prop::collection::vec(any::<u8>(), 0..18)
    ) {
        let mut reader = initialized_mock_reader(vec![]);
        prop_assert_eq!(reader.calculate_crc(&data).unwrap(), crc_a(&data));
    }
}
