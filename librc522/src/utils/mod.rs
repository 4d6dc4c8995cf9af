//! Small helpers shared across the crate: hex rendering for logs and the
//! wait-budget type the polling loops run against.

pub mod hex;
pub mod timeout;

// Re-export the common helpers at the `utils` level so callers can use
// `crate::utils::bytes_to_hex(...)` directly.
pub use hex::*;
pub use timeout::*;
