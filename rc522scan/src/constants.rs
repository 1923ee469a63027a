// rc522scan/src/constants.rs
//! Common protocol constants used across the crate

/// ISO14443A REQA: wake only tags in the IDLE state (7-bit short frame)
pub const PICC_REQIDL: u8 = 0x26;

/// ISO14443A WUPA: wake all tags, including HALTed ones
pub const PICC_REQALL: u8 = 0x52;

/// Cascade-level select command bytes (SEL) for levels 1..3
pub const PICC_SEL_CL1: u8 = 0x93;
/// SEL, cascade level 2
pub const PICC_SEL_CL2: u8 = 0x95;
/// SEL, cascade level 3
pub const PICC_SEL_CL3: u8 = 0x97;

/// NVB for an ANTICOLLISION frame: SEL + NVB only, no UID bits known yet
pub const PICC_NVB_ANTICOLL: u8 = 0x20;

/// NVB for a SELECT frame: SEL + NVB + 4 UID bytes + BCC
pub const PICC_NVB_SELECT: u8 = 0x70;

/// Cascade tag (CT): first UID byte when more bytes follow at the next level
pub const CASCADE_TAG: u8 = 0x88;

/// Bits in an ATQA answer
pub const ATQA_BITS: usize = 16;

/// Bits in a SAK answer (SAK + CRC_A)
pub const SAK_BITS: usize = 24;

/// Bytes in an anticollision answer: 4 UID bytes + BCC
pub const ANTICOLL_RESPONSE_LEN: usize = 5;

/// Size of the MFRC522 FIFO buffer in bytes
pub const FIFO_CAPACITY: usize = 16;

/// Largest payload accepted by the command engine
pub const MAX_PAYLOAD_LEN: usize = 64;

/// Default ComIrq poll bound for a transceive round
pub const TRANSCEIVE_WAIT_ITERATIONS: u32 = 2000;

/// Default DivIrq poll bound for a CRC coprocessor round
pub const CRC_WAIT_ITERATIONS: u32 = 255;

/// Tone frequency of the confirmation beep
pub const BEEP_FREQUENCY_HZ: u32 = 330;
