// rc522scan/src/error.rs

//! Crate-wide error type.

use thiserror::Error;

use crate::device::registers::Register;
use crate::types::Status;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// The builder was asked for a reader without a transport.
    #[error("no transport configured")]
    NoTransport,

    /// The serial bus transaction itself failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// Driving the chip reset line failed.
    #[error("reset line error: {0}")]
    ResetLine(String),

    /// No transponder answered before the chip timer expired.
    #[error("no tag in field")]
    NoTag,

    /// A completion flag never showed up within the poll bound.
    #[error("busy-wait exhausted: {register:?} polled {iterations} times")]
    BusyWaitExhausted {
        /// Register that was polled
        register: Register,
        /// Reads spent before giving up
        iterations: u32,
    },

    /// The Error register flagged the round as invalid.
    #[error("chip reported error flags {flags:#04x}")]
    ChipError {
        /// Error register bits, masked to the fatal ones
        flags: u8,
    },

    /// An answer carried the wrong number of valid bits.
    #[error("unexpected response length: expected {expected} bits, got {actual}")]
    UnexpectedBitLength {
        /// Bits the frame type requires
        expected: usize,
        /// Bits received
        actual: usize,
    },

    /// An answer or identifier had the wrong number of bytes.
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Bytes required
        expected: usize,
        /// Bytes received
        actual: usize,
    },

    /// The BCC of an anticollision answer did not match its UID bytes.
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        /// Check byte computed from the received bytes
        expected: u8,
        /// Check byte the tag sent
        actual: u8,
    },

    /// Command input larger than the engine accepts.
    #[error("payload too long: {len} bytes (max {max})")]
    PayloadTooLong {
        /// Input length
        len: usize,
        /// Accepted maximum
        max: usize,
    },

    /// The command engine has no interrupt profile for this command.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A keystroke or audio sink refused the request.
    #[error("sink error: {0}")]
    Sink(String),
}

impl Error {
    /// Fold the error into the tri-state protocol status. Only an absent tag
    /// is distinguished; every other failure counts as a protocol error.
    pub fn status(&self) -> Status {
        match self {
            Error::NoTag => Status::NoTag,
            _ => Status::Error,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
