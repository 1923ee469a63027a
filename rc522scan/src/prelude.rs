// rc522scan/src/prelude.rs

//! Commonly used types in one import.

pub use crate::device::{AntennaGain, Reader, ReaderBuilder, ReaderConfig};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::device::{Command, Register};
pub use crate::feedback::{AudioSink, KeystrokeSink};
pub use crate::scanner::{Clock, ScanMode, Scanner, ScannerConfig, SystemClock, TagEvent};
pub use crate::transport::Transport;
pub use crate::{Atqa, CascadeLevel, Error, RawResponse, RequestMode, Result, Status, Tag, TagType, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_upper, default_presence_timeout, ms};
