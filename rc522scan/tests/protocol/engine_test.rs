use rc522scan::device::{Command, Register, ReaderConfig};
use rc522scan::test_support::initialized_mock_reader;
use rc522scan::transport::ChipReply;
use rc522scan::{Error, Status};

#[test]
fn transceive_loads_fifo_and_reads_answer() -> anyhow::Result<()> {
    let (mock, mut reader) = initialized_mock_reader(ReaderConfig::default())?;
    mock.push_reply(ChipReply::bytes(hex::decode("0400")?));

    let resp = reader.execute(Command::Transceive, &[0x26])?;
    assert_eq!(resp.data, vec![0x04, 0x00]);
    assert_eq!(resp.bits, 16);
    assert_eq!(mock.sent_frames(), vec![vec![0x26]]);

    let writes = mock.writes();
    // interrupt enable first, then request bits cleared, FIFO flushed
    assert_eq!(writes[0], (Register::ComIEn, 0xF7));
    assert_eq!(writes[1], (Register::ComIrq, 0x7F));
    assert_eq!(writes[2], (Register::FifoLevel, 0x80));
    Ok(())
}

#[test]
fn every_outcome_maps_to_a_status() -> anyhow::Result<()> {
    let (mock, mut reader) = initialized_mock_reader(ReaderConfig::default())?;
    mock.push_replies([
        ChipReply::bytes(vec![0x01]),
        ChipReply::Timeout,
        ChipReply::ChipError(0x02),
    ]);

    let ok = reader.execute(Command::Transceive, &[0x52]);
    assert_eq!(Status::of(&ok), Status::Ok);
    let absent = reader.execute(Command::Transceive, &[0x52]);
    assert_eq!(Status::of(&absent), Status::NoTag);
    let failed = reader.execute(Command::Transceive, &[0x52]);
    assert_eq!(Status::of(&failed), Status::Error);
    assert!(matches!(failed, Err(Error::ChipError { flags: 0x02 })));
    Ok(())
}

#[test]
fn silent_chip_exhausts_busy_wait() -> anyhow::Result<()> {
    let cfg = ReaderConfig::default().with_transceive_wait_iterations(10);
    let (mock, mut reader) = initialized_mock_reader(cfg)?;
    mock.push_reply(ChipReply::Silent);

    let err = reader.execute(Command::Transceive, &[0x52]).unwrap_err();
    assert_eq!(err.status(), Status::Error);
    assert_eq!(mock.read_count(Register::ComIrq), 10);
    Ok(())
}

#[test]
fn compute_crc_matches_software_crc() -> anyhow::Result<()> {
    let (_mock, mut reader) = initialized_mock_reader(ReaderConfig::default())?;
    let frame = hex::decode("5000")?;
    assert_eq!(reader.compute_crc(&frame)?, [0x57, 0xCD]);
    Ok(())
}
