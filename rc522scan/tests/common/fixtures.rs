// fixtures.rs: tag identifiers and ATQA codes used across the suites

/// Single size UID (4 bytes)
pub const SINGLE_UID: [u8; 4] = [0x04, 0x1A, 0x2B, 0x3C];

/// Same UID as typed on the keyboard
pub const SINGLE_UID_TEXT: &str = "041A2B3C";

/// Double size UID (7 bytes), NTAG style
pub const DOUBLE_UID: [u8; 7] = [0x04, 0xA1, 0xB2, 0xC3, 0xD4, 0xE5, 0xF6];

/// Triple size UID (10 bytes)
pub const TRIPLE_UID: [u8; 10] = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA];

pub const ATQA_NTAG213: u16 = 0x0044;
pub const ATQA_NTAG215: u16 = 0x0042;
pub const ATQA_NTAG216: u16 = 0x0043;
pub const ATQA_MIFARE_CLASSIC_1K: u16 = 0x0004;

/// Answer-to-request outside the NTAG lookup; classifies as Unknown
pub const ATQA_UNCLASSIFIED: u16 = 0x0010;

/// SAK of a tag that has finished its cascade and is not ISO14443-4
pub const SAK_COMPLETE: u8 = 0x00;
