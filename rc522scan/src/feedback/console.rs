// rc522scan/src/feedback/console.rs

//! Host-side sinks: a writer-backed keyboard and a logging buzzer.

use std::io::Write;

use log::debug;

use crate::feedback::traits::{AudioSink, KeystrokeSink};
use crate::{Error, Result};

/// Keystroke sink that writes to any `io::Write` (stdout for a host-side
/// keyboard wedge). Enter becomes a newline.
pub struct WriterKeyboard<W: Write> {
    out: W,
}

impl<W: Write> WriterKeyboard<W> {
    /// Type into `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give the writer back
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl WriterKeyboard<std::io::Stdout> {
    /// Keyboard wedge on standard output
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> KeystrokeSink for WriterKeyboard<W> {
    fn type_text(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .map_err(|e| Error::Sink(e.to_string()))
    }

    fn press_enter(&mut self) -> Result<()> {
        self.out
            .write_all(b"\n")
            .and_then(|_| self.out.flush())
            .map_err(|e| Error::Sink(e.to_string()))
    }
}

/// Audio sink for boards without a buzzer: logs the tone edges.
#[derive(Debug, Default)]
pub struct LogBuzzer {
    on: bool,
}

impl LogBuzzer {
    /// Buzzer starting silent
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the tone is currently on
    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl AudioSink for LogBuzzer {
    fn set_tone(&mut self, on: bool) -> Result<()> {
        self.on = on;
        debug!(
            "beep {} ({} Hz)",
            if on { "on" } else { "off" },
            self.frequency_hz()
        );
        Ok(())
    }
}
