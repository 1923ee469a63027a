//! Utilities for rc522scan: small, reusable helpers used across the crate.
//!
//! This module intentionally contains tiny, well-tested helpers for hex
//! formatting of identifiers and timing defaults.

pub mod hex;
pub mod timeout;

// Re-export the most common helpers at the `utils` module level so callers can
// use `crate::utils::bytes_to_hex(...)` etc if they prefer.
pub use self::hex::*;
pub use self::timeout::*;
