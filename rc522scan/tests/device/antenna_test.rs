use rc522scan::device::{AntennaGain, ReaderConfig, Register};
use rc522scan::test_support::initialized_mock_reader;

#[test]
fn antenna_toggle_preserves_other_tx_bits() -> anyhow::Result<()> {
    let (mock, mut reader) = initialized_mock_reader(ReaderConfig::default())?;
    mock.set_register(Register::TxControl, 0x83);

    reader.antenna_on(false)?;
    assert_eq!(mock.register(Register::TxControl), 0x80);
    reader.antenna_on(true)?;
    assert_eq!(mock.register(Register::TxControl), 0x83);
    Ok(())
}

#[test]
fn repeated_antenna_on_writes_nothing() -> anyhow::Result<()> {
    let (mock, mut reader) = initialized_mock_reader(ReaderConfig::default())?;
    reader.antenna_on(true)?;
    reader.antenna_on(true)?;
    assert!(mock.writes().is_empty());
    assert!(reader.is_antenna_on()?);
    Ok(())
}

#[test]
fn gain_only_touches_rx_gain_bits() -> anyhow::Result<()> {
    let (mock, mut reader) = initialized_mock_reader(ReaderConfig::default())?;
    mock.set_register(Register::RfCfg, 0x8F);

    reader.set_antenna_gain(AntennaGain::Db33)?;
    assert_eq!(mock.register(Register::RfCfg), 0xCF);
    reader.set_antenna_gain(AntennaGain::Db18)?;
    assert_eq!(mock.register(Register::RfCfg), 0x8F);
    Ok(())
}
