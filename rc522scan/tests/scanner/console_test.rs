use rc522scan::device::ReaderConfig;
use rc522scan::feedback::{LogBuzzer, WriterKeyboard};
use rc522scan::scanner::{ManualClock, Scanner, ScannerConfig};
use rc522scan::test_support::initialized_mock_reader;

use crate::common::fixtures::*;
use crate::common::*;

#[test]
fn identifier_lines_reach_the_writer() -> anyhow::Result<()> {
    init_logging();
    let (mock, reader) = initialized_mock_reader(ReaderConfig::default())?;
    let out = SharedBuffer::default();
    let mut scanner = Scanner::new(
        reader,
        Box::new(WriterKeyboard::new(out.clone())),
        Box::new(LogBuzzer::new()),
        Box::new(ManualClock::new()),
        ScannerConfig::default(),
    );

    seed_single_level_poll(&mock, ATQA_NTAG213, SINGLE_UID);
    scanner.poll();
    seed_single_level_poll(&mock, ATQA_NTAG213, SINGLE_UID);
    scanner.poll();
    seed_single_level_poll(&mock, ATQA_NTAG213, [0x01, 0x02, 0x03, 0x04]);
    scanner.poll();

    assert_eq!(out.contents(), "041A2B3C\n01020304\n");
    Ok(())
}
