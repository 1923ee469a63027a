// rc522scan/src/protocol/checksum.rs

//! BCC and CRC_A check values.

/// Compute the Block Check Character (BCC) of a UID fragment
/// BCC = uid0 ^ uid1 ^ uid2 ^ uid3
pub fn bcc(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// Compute CRC_A (ISO/IEC 14443-3 Annex B) in software
/// Preset 0x6363, reflected polynomial 0x8408; returned low byte first,
/// the same order the chip exposes it in CrcResultL / CrcResultH.
pub fn crc_a(data: &[u8]) -> [u8; 2] {
    let mut crc: u16 = 0x6363;
    for &byte in data {
        let mut ch = byte ^ (crc & 0x00ff) as u8;
        ch ^= ch << 4;
        let ch = ch as u16;
        crc = (crc >> 8) ^ (ch << 8) ^ (ch << 3) ^ (ch >> 4);
    }
    crc.to_le_bytes()
}
