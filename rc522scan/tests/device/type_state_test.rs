use rc522scan::device::{Reader, ReaderBuilder, ReaderConfig, Register};
use rc522scan::transport::{MockTransport, Transport};

use crate::common::init_logging;

#[test]
fn builder_initializes_reader() -> anyhow::Result<()> {
    init_logging();
    let mock = MockTransport::new();
    let boxed: Box<dyn Transport> = Box::new(mock.clone());

    let mut reader = ReaderBuilder::new()
        .with_transport(boxed)
        .with_config(ReaderConfig::default())
        .build()?;

    assert_eq!(mock.resets(), 1);
    assert_eq!(reader.version()?, 0x92);
    assert!(reader.is_antenna_on()?);
    Ok(())
}

#[test]
fn uninitialized_reader_keeps_config() -> anyhow::Result<()> {
    let boxed: Box<dyn Transport> = Box::new(MockTransport::new());
    let cfg = ReaderConfig::default().with_crc_wait_iterations(3);
    let reader = Reader::new_with_transport(boxed, cfg.clone());
    assert_eq!(reader.config(), &cfg);

    let initialized = reader.initialize()?;
    assert_eq!(initialized.config().crc_wait_iterations, 3);
    Ok(())
}

#[test]
fn initialization_writes_timer_and_modulation_setup() -> anyhow::Result<()> {
    let mock = MockTransport::new();
    let boxed: Box<dyn Transport> = Box::new(mock.clone());
    let _reader = Reader::new_with_transport(boxed, ReaderConfig::default()).initialize()?;

    assert_eq!(mock.register(Register::TMode), 0x8D);
    assert_eq!(mock.register(Register::TPrescaler), 0x3E);
    assert_eq!(mock.register(Register::TReloadL), 30);
    assert_eq!(mock.register(Register::TxAsk), 0x40);
    assert_eq!(mock.register(Register::Mode), 0x3D);
    Ok(())
}
