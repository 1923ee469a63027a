use rc522scan::protocol::{bcc, crc_a};

#[test]
fn crc_a_known_frames() {
    // HLTA
    assert_eq!(crc_a(&[0x50, 0x00]), [0x57, 0xCD]);
    // READ page 0
    assert_eq!(crc_a(&[0x30, 0x00]), [0x02, 0xA8]);
}

#[test]
fn crc_a_of_frame_with_crc_appended_is_zero_residue() {
    let body = hex::decode("9370041a2b3c09").unwrap();
    let mut frame = body.clone();
    frame.extend_from_slice(&crc_a(&body));
    // the CRC_A residue over a frame and its own CRC is 0x0000
    assert_eq!(crc_a(&frame), [0x00, 0x00]);
}

#[test]
fn bcc_over_cascade_fragment() {
    assert_eq!(bcc(&[0x88, 0x04, 0x1A, 0x2B]), 0xBD);
    assert_eq!(bcc(&[0x04, 0x1A, 0x2B, 0x3C]), 0x09);
}
