// rc522scan/src/feedback/mock.rs

//! Recording sinks for tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::feedback::traits::{AudioSink, KeystrokeSink};
use crate::{Error, Result};

/// One recorded keyboard action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// `type_text` call
    Text(String),
    /// `press_enter` call
    Enter,
}

/// Keystroke sink for tests. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingKeyboard {
    events: Rc<RefCell<Vec<KeyEvent>>>,
    failing: Rc<Cell<bool>>,
}

impl RecordingKeyboard {
    /// Keyboard with an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded call, in order
    pub fn events(&self) -> Vec<KeyEvent> {
        self.events.borrow().clone()
    }

    /// Texts typed so far, in order
    pub fn typed(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                KeyEvent::Text(t) => Some(t.clone()),
                KeyEvent::Enter => None,
            })
            .collect()
    }

    /// Number of Enter presses
    pub fn enter_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| **e == KeyEvent::Enter)
            .count()
    }

    /// Make every call fail (the host unplugged the HID endpoint, say).
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    fn record(&self, event: KeyEvent) -> Result<()> {
        if self.failing.get() {
            return Err(Error::Sink("keyboard unavailable".into()));
        }
        self.events.borrow_mut().push(event);
        Ok(())
    }
}

impl KeystrokeSink for RecordingKeyboard {
    fn type_text(&mut self, text: &str) -> Result<()> {
        self.record(KeyEvent::Text(text.to_string()))
    }

    fn press_enter(&mut self) -> Result<()> {
        self.record(KeyEvent::Enter)
    }
}

/// Audio sink for tests: records every on/off edge.
#[derive(Debug, Clone, Default)]
pub struct RecordingBuzzer {
    edges: Rc<RefCell<Vec<bool>>>,
}

impl RecordingBuzzer {
    /// Buzzer with no edges recorded
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `set_tone` argument, in order
    pub fn edges(&self) -> Vec<bool> {
        self.edges.borrow().clone()
    }

    /// Completed on→off pulses
    pub fn pulses(&self) -> usize {
        self.edges
            .borrow()
            .windows(2)
            .filter(|w| w[0] && !w[1])
            .count()
    }
}

impl AudioSink for RecordingBuzzer {
    fn set_tone(&mut self, on: bool) -> Result<()> {
        self.edges.borrow_mut().push(on);
        Ok(())
    }
}
