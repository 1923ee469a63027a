// rc522scan/src/protocol/mod.rs

//! ISO14443A protocol on top of the chip: command engine, checksums and the
//! anticollision cascade.

pub mod anticollision;
pub mod checksum;
pub mod engine;

pub use checksum::{bcc, crc_a};
pub use engine::IrqProfile;
