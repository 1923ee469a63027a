// rc522scan/src/types.rs

//! Value types shared by the driver and the presence loop.

use crate::constants::{PICC_REQALL, PICC_REQIDL, PICC_SEL_CL1, PICC_SEL_CL2, PICC_SEL_CL3};
use crate::Error;
use derive_more::Display;
use std::convert::TryFrom;
use std::fmt;

/// Tri-state outcome of a protocol-level operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The operation succeeded
    Ok,
    /// No tag answered
    NoTag,
    /// Malformed answer, checksum mismatch, chip error or bus failure
    Error,
}

impl Status {
    /// Tri-state view of a result.
    pub fn of<T>(result: &crate::Result<T>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }
}

/// UID - Newtype Pattern (4 / 7 / 10 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid {
    bytes: [u8; 10],
    len: usize,
}

impl Uid {
    /// Valid UID sizes: single, double and triple size.
    pub const SIZES: [usize; 3] = [4, 7, 10];

    /// Single size UID, or the first cascade fragment of a longer one.
    pub fn from_single(bytes: [u8; 4]) -> Self {
        let mut arr = [0u8; 10];
        arr[..4].copy_from_slice(&bytes);
        Self { bytes: arr, len: 4 }
    }

    /// The identifier bytes, without padding
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Identifier length in bytes: 4, 7 or 10
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for identifiers built through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Lowercase hex without separators, e.g. `041a2b3c`.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if !Self::SIZES.contains(&bytes.len()) {
            let expected = Self::SIZES
                .iter()
                .copied()
                .find(|&n| n >= bytes.len())
                .unwrap_or(10);
            return Err(Error::InvalidLength {
                expected,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 10];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len(),
        })
    }
}

/// Uppercase hex, the form typed out to the keystroke sink.
impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::bytes_to_hex_upper(self.as_bytes()))
    }
}

/// ATQA (u16), decoded low byte first as transmitted on air
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{:#06x}", _0)]
pub struct Atqa(u16);

impl Atqa {
    /// Wrap a raw answer-to-request code.
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Raw code
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Decode the two answer bytes, low byte first.
    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }
}

/// Tag family inferred from the ATQA of a follow-up idle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagType {
    /// NTAG213, ATQA 0x0044
    Ntag213,
    /// NTAG215, ATQA 0x0042
    Ntag215,
    /// NTAG216, ATQA 0x0043
    Ntag216,
    /// Any other code; the identifier is still valid
    Unknown,
}

impl TagType {
    /// Look the code up in the fixed classification table.
    pub fn from_atqa(atqa: Atqa) -> Self {
        match atqa.as_u16() {
            0x0044 => Self::Ntag213,
            0x0042 => Self::Ntag215,
            0x0043 => Self::Ntag216,
            _ => Self::Unknown,
        }
    }

    /// Highest addressable memory page, or `None` when unclassified.
    pub fn max_page(&self) -> Option<u8> {
        match self {
            Self::Ntag213 => Some(44),
            Self::Ntag215 => Some(129),
            Self::Ntag216 => Some(231),
            Self::Unknown => None,
        }
    }
}

/// Anticollision cascade level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CascadeLevel {
    /// SEL 0x93
    One,
    /// SEL 0x95
    Two,
    /// SEL 0x97
    Three,
}

impl CascadeLevel {
    /// Levels in cascade order
    pub const ALL: [CascadeLevel; 3] = [Self::One, Self::Two, Self::Three];

    /// SEL byte sent at this level
    pub fn select_byte(&self) -> u8 {
        match self {
            Self::One => PICC_SEL_CL1,
            Self::Two => PICC_SEL_CL2,
            Self::Three => PICC_SEL_CL3,
        }
    }

    /// Level that follows a cascade tag, `None` after level three.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::One => Some(Self::Two),
            Self::Two => Some(Self::Three),
            Self::Three => None,
        }
    }
}

/// Which tags a request wakes up
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    /// REQA: tags in the IDLE state only
    Idle = PICC_REQIDL,
    /// WUPA: every tag in the field
    All = PICC_REQALL,
}

/// Response bytes of one command round plus the exact number of valid bits.
/// The last byte may be partially valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    /// Bytes drained from the FIFO
    pub data: Vec<u8>,
    /// Valid bits across `data`
    pub bits: usize,
}

/// A fully resolved tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    /// Full identifier, cascade tags removed
    pub uid: Uid,
    /// Classification from the follow-up request
    pub tag_type: TagType,
}
