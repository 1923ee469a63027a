// rc522scan/src/protocol/anticollision.rs

//! ISO14443A REQUEST / ANTICOLLISION / SELECT cascade.

use log::debug;

use crate::constants::{
    ANTICOLL_RESPONSE_LEN, ATQA_BITS, CASCADE_TAG, PICC_NVB_ANTICOLL, PICC_NVB_SELECT, SAK_BITS,
};
use crate::device::handle::{Initialized, Reader};
use crate::device::registers::{Command, Register, SHORT_FRAME_BITS};
use crate::protocol::checksum::bcc;
use crate::types::{Atqa, CascadeLevel, RequestMode, Tag, TagType, Uid};
use crate::{Error, Result};

impl Reader<Initialized> {
    /// Send REQA/WUPA as a 7-bit short frame and return the ATQA.
    pub fn request(&mut self, mode: RequestMode) -> Result<Atqa> {
        self.write(Register::BitFraming, SHORT_FRAME_BITS)?;
        let resp = self.execute(Command::Transceive, &[mode as u8])?;

        if resp.bits != ATQA_BITS {
            return Err(Error::UnexpectedBitLength {
                expected: ATQA_BITS,
                actual: resp.bits,
            });
        }
        Ok(Atqa::from_le_bytes([resp.data[0], resp.data[1]]))
    }

    /// Run one anticollision round at `level` and return the 4 UID bytes
    /// (cascade tag included, check byte stripped).
    pub fn anticollide(&mut self, level: CascadeLevel) -> Result<[u8; 4]> {
        self.write(Register::BitFraming, 0x00)?;
        let resp = self.execute(
            Command::Transceive,
            &[level.select_byte(), PICC_NVB_ANTICOLL],
        )?;

        if resp.data.len() != ANTICOLL_RESPONSE_LEN {
            return Err(Error::InvalidLength {
                expected: ANTICOLL_RESPONSE_LEN,
                actual: resp.data.len(),
            });
        }

        let fragment = [resp.data[0], resp.data[1], resp.data[2], resp.data[3]];
        let expected = bcc(&fragment);
        if expected != resp.data[4] {
            return Err(Error::ChecksumMismatch {
                expected,
                actual: resp.data[4],
            });
        }
        Ok(fragment)
    }

    /// Select the tag owning `fragment` at `level`. Returns the SAK.
    pub fn select(&mut self, level: CascadeLevel, fragment: &[u8; 4]) -> Result<u8> {
        let mut frame = Vec::with_capacity(9);
        frame.push(level.select_byte());
        frame.push(PICC_NVB_SELECT);
        frame.extend_from_slice(fragment);
        frame.push(bcc(fragment));

        let crc = self.compute_crc(&frame)?;
        frame.extend_from_slice(&crc);

        let resp = self.execute(Command::Transceive, &frame)?;
        if resp.bits != SAK_BITS {
            return Err(Error::UnexpectedBitLength {
                expected: SAK_BITS,
                actual: resp.bits,
            });
        }
        Ok(resp.data[0])
    }

    /// Walk the cascade levels until the full UID is known.
    ///
    /// Any failing round aborts the whole resolution; no partial UID is
    /// ever returned.
    pub fn resolve_identifier(&mut self) -> Result<Uid> {
        let mut uid = Vec::with_capacity(10);
        let mut level = CascadeLevel::One;

        loop {
            let fragment = self.anticollide(level)?;
            self.select(level, &fragment)?;
            debug!("cascade {:?}: {:02x?}", level, fragment);

            match level.next() {
                Some(next) if fragment[0] == CASCADE_TAG => {
                    uid.extend_from_slice(&fragment[1..]);
                    level = next;
                }
                _ => {
                    uid.extend_from_slice(&fragment);
                    break;
                }
            }
        }

        Uid::try_from(&uid[..])
    }

    /// Resolve the UID, then classify the tag from a follow-up idle
    /// request. An unanswered request or unknown ATQA leaves the type
    /// `Unknown` without invalidating the UID.
    pub fn read_tag(&mut self) -> Result<Tag> {
        let uid = self.resolve_identifier()?;
        let tag_type = match self.request(RequestMode::Idle) {
            Ok(atqa) => TagType::from_atqa(atqa),
            Err(e) => {
                debug!("tag type request failed: {}", e);
                TagType::Unknown
            }
        };
        Ok(Tag { uid, tag_type })
    }
}
