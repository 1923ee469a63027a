//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup and the tag answers
//! a test scenario needs, so tests across the crate and tests/ directory can
//! reuse the same logic.
#![allow(dead_code)]

use crate::constants::CASCADE_TAG;
use crate::device::{Initialized, Reader, ReaderConfig};
use crate::protocol::checksum::{bcc, crc_a};
use crate::transport::mock::{ChipReply, MockTransport};
use crate::{Result, transport};

/// Create and initialize a Reader backed by a fresh MockTransport. The
/// returned transport shares its chip with the reader.
#[doc(hidden)]
pub fn initialized_mock_reader(
    config: ReaderConfig,
) -> Result<(MockTransport, Reader<Initialized>)> {
    let mock = MockTransport::new();
    let boxed: Box<dyn transport::Transport> = Box::new(mock.clone());
    let reader = Reader::new_with_transport(boxed, config).initialize()?;
    mock.clear_log();
    Ok((mock, reader))
}

/// ATQA answer: 16 bits, low byte first.
#[doc(hidden)]
pub fn atqa_reply(code: u16) -> ChipReply {
    ChipReply::bytes(code.to_le_bytes().to_vec())
}

/// Anticollision answer: 4 UID bytes followed by their BCC.
#[doc(hidden)]
pub fn anticoll_reply(fragment: [u8; 4]) -> ChipReply {
    let mut data = fragment.to_vec();
    data.push(bcc(&fragment));
    ChipReply::bytes(data)
}

/// Anticollision answer with an explicit (possibly wrong) check byte.
#[doc(hidden)]
pub fn anticoll_reply_with_bcc(fragment: [u8; 4], check: u8) -> ChipReply {
    let mut data = fragment.to_vec();
    data.push(check);
    ChipReply::bytes(data)
}

/// SAK answer: SAK byte plus CRC_A, 24 bits.
#[doc(hidden)]
pub fn sak_reply(sak: u8) -> ChipReply {
    let crc = crc_a(&[sak]);
    ChipReply::bytes(vec![sak, crc[0], crc[1]])
}

/// Split a 4, 7 or 10 byte UID into the fragments returned at each cascade
/// level, inserting cascade tags where more bytes follow.
#[doc(hidden)]
pub fn cascade_fragments(uid: &[u8]) -> Vec<[u8; 4]> {
    match uid.len() {
        4 => vec![[uid[0], uid[1], uid[2], uid[3]]],
        7 => vec![
            [CASCADE_TAG, uid[0], uid[1], uid[2]],
            [uid[3], uid[4], uid[5], uid[6]],
        ],
        10 => vec![
            [CASCADE_TAG, uid[0], uid[1], uid[2]],
            [CASCADE_TAG, uid[3], uid[4], uid[5]],
            [uid[6], uid[7], uid[8], uid[9]],
        ],
        n => panic!("unsupported uid length {}", n),
    }
}

/// Tag answers for a full cascade resolve of `uid`: anticollision and
/// SAK per level (SAK 0x04 while incomplete, `final_sak` at the end).
#[doc(hidden)]
pub fn cascade_replies(uid: &[u8], final_sak: u8) -> Vec<ChipReply> {
    let fragments = cascade_fragments(uid);
    let last = fragments.len() - 1;
    let mut replies = Vec::new();
    for (i, fragment) in fragments.into_iter().enumerate() {
        replies.push(anticoll_reply(fragment));
        replies.push(sak_reply(if i == last { final_sak } else { 0x04 }));
    }
    replies
}

/// Push the answers of one presence poll that sees a single-size tag:
/// ATQA for the wake-up request, then the level-1 anticollision frame.
#[doc(hidden)]
pub fn seed_single_level_poll(mock: &MockTransport, atqa: u16, fragment: [u8; 4]) {
    mock.push_reply(atqa_reply(atqa));
    mock.push_reply(anticoll_reply(fragment));
}
