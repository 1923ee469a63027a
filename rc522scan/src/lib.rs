// rc522scan/src/lib.rs

//! rc522scan
//!
//! Pure Rust driver for the MFRC522 RFID front-end that resolves ISO14443A
//! tag identifiers and turns repeated reads into debounced "tag seen" events.
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod feedback;
pub mod prelude;
pub mod protocol;
pub mod scanner;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
