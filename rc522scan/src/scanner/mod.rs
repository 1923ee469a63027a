// rc522scan/src/scanner/mod.rs

//! Presence loop: poll the field, debounce, and report new tags as
//! keystrokes followed by a beep.

pub mod clock;
pub mod config;
pub mod debounce;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ScanMode, ScannerConfig};
pub use debounce::{Debouncer, TagEvent};

use log::{debug, info, trace, warn};

use crate::device::{Initialized, Reader};
use crate::feedback::{AudioSink, KeystrokeSink};
use crate::types::{CascadeLevel, RequestMode, Status, Uid};
use crate::Result;

/// Owns the reader and the output sinks for the lifetime of the loop.
pub struct Scanner {
    reader: Reader<Initialized>,
    keyboard: Box<dyn KeystrokeSink>,
    buzzer: Box<dyn AudioSink>,
    clock: Box<dyn Clock>,
    debouncer: Debouncer,
    config: ScannerConfig,
}

impl Scanner {
    /// Wire a scanner. The debouncer starts Idle with the configured
    /// presence timeout.
    pub fn new(
        reader: Reader<Initialized>,
        keyboard: Box<dyn KeystrokeSink>,
        buzzer: Box<dyn AudioSink>,
        clock: Box<dyn Clock>,
        config: ScannerConfig,
    ) -> Self {
        Self {
            reader,
            keyboard,
            buzzer,
            clock,
            debouncer: Debouncer::new(config.presence_timeout),
            config,
        }
    }

    /// Loop configuration
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Presence state, for inspection
    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    /// Direct access to the reader between polls.
    pub fn reader_mut(&mut self) -> &mut Reader<Initialized> {
        &mut self.reader
    }

    /// Read the identifier of a tag that already answered the wake-up
    /// request, according to the configured scan mode.
    pub fn read_identifier(&mut self) -> Result<Uid> {
        match self.config.scan_mode {
            ScanMode::SingleLevel => {
                let fragment = self.reader.anticollide(CascadeLevel::One)?;
                Ok(Uid::from_single(fragment))
            }
            ScanMode::Cascade => {
                let tag = self.reader.read_tag()?;
                debug!("{} is {:?}", tag.uid, tag.tag_type);
                Ok(tag.uid)
            }
        }
    }

    /// Poll once. Returns the event when a tag not currently tracked was
    /// read; sink failures are logged and do not abort the poll.
    ///
    /// Only an unanswered wake-up request counts as absence. A tag that
    /// answers but cannot be read leaves the presence state alone.
    pub fn poll(&mut self) -> Option<TagEvent> {
        if let Err(e) = self.reader.request(RequestMode::All) {
            if e.status() == Status::NoTag {
                trace!("field empty");
            } else {
                debug!("wake-up request failed: {}", e);
            }
            let now = self.clock.now();
            self.debouncer.observe(None, now);
            return None;
        }

        let uid = match self.read_identifier() {
            Ok(uid) => uid,
            Err(e) => {
                debug!("tag answered but could not be read: {}", e);
                return None;
            }
        };

        let now = self.clock.now();
        let event = self.debouncer.observe(Some(&uid), now);
        if let Some(event) = &event {
            info!("tag {}", event.text);
            if let Err(e) = self.emit(event) {
                warn!("feedback for {} failed: {}", event.text, e);
            }
            self.clock.sleep(self.config.cool_down);
        }
        let now = self.clock.now();
        self.debouncer.touch(now);
        event
    }

    /// Poll forever.
    pub fn run(&mut self) -> ! {
        info!(
            "scanning ({:?}, presence timeout {:?})",
            self.config.scan_mode, self.config.presence_timeout
        );
        loop {
            self.poll();
            if !self.config.poll_interval.is_zero() {
                self.clock.sleep(self.config.poll_interval);
            }
        }
    }

    fn emit(&mut self, event: &TagEvent) -> Result<()> {
        self.keyboard.type_text(&event.text)?;
        self.clock.sleep(self.config.keystroke_settle);
        self.keyboard.press_enter()?;

        trace!("beep at {} Hz", self.buzzer.frequency_hz());
        self.buzzer.set_tone(true)?;
        self.clock.sleep(self.config.beep_duration);
        self.buzzer.set_tone(false)
    }
}
