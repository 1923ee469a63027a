// helpers.rs: wiring of mock readers and scanners

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use rc522scan::device::ReaderConfig;
use rc522scan::feedback::{RecordingBuzzer, RecordingKeyboard};
use rc522scan::scanner::{ManualClock, Scanner, ScannerConfig};
use rc522scan::test_support;
use rc522scan::transport::MockTransport;

pub use rc522scan::test_support::{
    anticoll_reply, atqa_reply, cascade_replies, sak_reply, seed_single_level_poll,
};

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A scanner on a mock chip, with handles to every observable side.
pub struct ScannerRig {
    pub mock: MockTransport,
    pub keyboard: RecordingKeyboard,
    pub buzzer: RecordingBuzzer,
    pub clock: ManualClock,
    pub scanner: Scanner,
}

pub fn scanner_rig(config: ScannerConfig) -> rc522scan::Result<ScannerRig> {
    init_logging();
    let (mock, reader) = test_support::initialized_mock_reader(ReaderConfig::default())?;
    let keyboard = RecordingKeyboard::new();
    let buzzer = RecordingBuzzer::new();
    let clock = ManualClock::new();
    let scanner = Scanner::new(
        reader,
        Box::new(keyboard.clone()),
        Box::new(buzzer.clone()),
        Box::new(clock.clone()),
        config,
    );
    Ok(ScannerRig {
        mock,
        keyboard,
        buzzer,
        clock,
        scanner,
    })
}

/// In-memory `Write` target that stays inspectable after being boxed away.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
