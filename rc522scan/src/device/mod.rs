// rc522scan/src/device/mod.rs

//! Reader handle, configuration and register map.

pub mod builder;
pub mod config;
pub mod handle;
pub mod registers;

pub use builder::ReaderBuilder;
pub use config::{AntennaGain, ReaderConfig};
pub use handle::{Initialized, Reader, Uninitialized};
pub use registers::{Command, Register};
