use rc522scan::device::ReaderConfig;
use rc522scan::test_support::initialized_mock_reader;
use rc522scan::transport::ChipReply;
use rc522scan::{CascadeLevel, Error, RequestMode, TagType};

use crate::common::fixtures::*;
use crate::common::*;

#[test]
fn wake_up_then_level_one() -> anyhow::Result<()> {
    let (mock, mut reader) = initialized_mock_reader(ReaderConfig::default())?;
    seed_single_level_poll(&mock, ATQA_NTAG213, SINGLE_UID);

    let atqa = reader.request(RequestMode::All)?;
    assert_eq!(TagType::from_atqa(atqa), TagType::Ntag213);
    let fragment = reader.anticollide(CascadeLevel::One)?;
    assert_eq!(hex::encode(fragment), SINGLE_UID_TEXT.to_lowercase());
    Ok(())
}

#[test]
fn double_size_uid_resolves_without_cascade_tag() -> anyhow::Result<()> {
    let (mock, mut reader) = initialized_mock_reader(ReaderConfig::default())?;
    mock.push_replies(cascade_replies(&DOUBLE_UID, SAK_COMPLETE));

    let uid = reader.resolve_identifier()?;
    assert_eq!(uid.as_bytes(), &DOUBLE_UID);
    assert_eq!(uid.to_string(), "04A1B2C3D4E5F6");
    assert_eq!(mock.pending_replies(), 0);
    Ok(())
}

#[test]
fn triple_size_uid_resolves() -> anyhow::Result<()> {
    let (mock, mut reader) = initialized_mock_reader(ReaderConfig::default())?;
    mock.push_replies(cascade_replies(&TRIPLE_UID, SAK_COMPLETE));

    let uid = reader.resolve_identifier()?;
    assert_eq!(uid.len(), 10);
    assert_eq!(uid.as_bytes(), &TRIPLE_UID);
    Ok(())
}

#[test]
fn read_tag_classifies_known_atqa_codes() -> anyhow::Result<()> {
    for (atqa, expected) in [
        (ATQA_NTAG213, TagType::Ntag213),
        (ATQA_NTAG215, TagType::Ntag215),
        (ATQA_NTAG216, TagType::Ntag216),
        (ATQA_MIFARE_CLASSIC_1K, TagType::Unknown),
    ] {
        let (mock, mut reader) = initialized_mock_reader(ReaderConfig::default())?;
        mock.push_replies(cascade_replies(&DOUBLE_UID, SAK_COMPLETE));
        mock.push_reply(atqa_reply(atqa));

        let tag = reader.read_tag()?;
        assert_eq!(tag.tag_type, expected);
        assert_eq!(tag.uid.as_bytes(), &DOUBLE_UID);
    }
    Ok(())
}

#[test]
fn no_partial_uid_on_mid_cascade_timeout() -> anyhow::Result<()> {
    let (mock, mut reader) = initialized_mock_reader(ReaderConfig::default())?;
    let mut replies = cascade_replies(&DOUBLE_UID, SAK_COMPLETE);
    replies.truncate(2);
    replies.push(ChipReply::Timeout);
    mock.push_replies(replies);

    assert!(matches!(reader.resolve_identifier(), Err(Error::NoTag)));
    Ok(())
}

#[test]
fn sak_frames_are_24_bits() -> anyhow::Result<()> {
    let (mock, mut reader) = initialized_mock_reader(ReaderConfig::default())?;
    mock.push_reply(sak_reply(0x08));
    assert_eq!(reader.select(CascadeLevel::One, &SINGLE_UID)?, 0x08);
    mock.push_reply(anticoll_reply(SINGLE_UID));
    assert!(reader.select(CascadeLevel::One, &SINGLE_UID).is_err());
    Ok(())
}
