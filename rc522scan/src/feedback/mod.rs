// rc522scan/src/feedback/mod.rs

//! Output side of the scanner: where identifiers are typed and how the
//! confirmation beep is produced.

pub mod console;
pub mod mock;
pub mod traits;

pub use console::{LogBuzzer, WriterKeyboard};
pub use mock::{KeyEvent, RecordingBuzzer, RecordingKeyboard};
pub use traits::{AudioSink, KeystrokeSink};
