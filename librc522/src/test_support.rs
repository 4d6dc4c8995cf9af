//! Test support helpers intended for use by unit and integration tests.
//!
//! These centralize the common mock-reader setup so tests across the crate
//! and the tests/ directory share one way of scripting a device.

use crate::bus::mock::{MockDevice, MockExchange};
use crate::protocol::checksum::uid_checksum;
use crate::reader::{Initialized, Reader};

/// A mock device pre-loaded with the given scripted exchanges.
#[doc(hidden)]
pub fn mock_with_exchanges(exchanges: Vec<MockExchange>) -> MockDevice {
    let mut mock = MockDevice::new();
    for exchange in exchanges {
        mock.push_exchange(exchange);
    }
    mock
}

/// An initialized reader over a scripted mock device.
#[doc(hidden)]
pub fn initialized_mock_reader(exchanges: Vec<MockExchange>) -> Reader<MockDevice, Initialized> {
    Reader::new(mock_with_exchanges(exchanges)).initialize()
}

/// Scripted answers for one full detection: the ATQA reply to the request
/// and the UID reply (with its computed check byte) to anti-collision.
#[doc(hidden)]
pub fn detection_exchanges(uid: [u8; 4], tag_type: [u8; 2]) -> Vec<MockExchange> {
    let mut serial = uid.to_vec();
    serial.push(uid_checksum(&uid));
    vec![
        MockExchange::reply(&tag_type),
        MockExchange::reply(&serial),
    ]
}
