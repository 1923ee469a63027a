// rc522scan/src/scanner/config.rs

//! Presence loop configuration

use std::time::Duration;

use crate::utils::{
    DEFAULT_BEEP_MS, DEFAULT_COOL_DOWN_MS, DEFAULT_KEYSTROKE_SETTLE_MS, default_presence_timeout,
    ms,
};

/// How much of the cascade a poll runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanMode {
    /// Level-1 anticollision only. Double and triple size UIDs are reported
    /// as their first fragment, cascade tag included.
    #[default]
    SingleLevel,
    /// Full cascade with SELECT at every level, plus tag classification.
    Cascade,
}

/// Timing and scan depth of the presence loop.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScannerConfig {
    /// Absence needed before a tag may be reported again
    pub presence_timeout: Duration,
    /// Pause between the identifier text and Enter
    pub keystroke_settle: Duration,
    /// Beep length
    pub beep_duration: Duration,
    /// Pause after an event
    pub cool_down: Duration,
    /// Pause between polls; zero polls back to back
    pub poll_interval: Duration,
    /// How much of the cascade each poll runs
    pub scan_mode: ScanMode,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            presence_timeout: default_presence_timeout(),
            keystroke_settle: ms(DEFAULT_KEYSTROKE_SETTLE_MS),
            beep_duration: ms(DEFAULT_BEEP_MS),
            cool_down: ms(DEFAULT_COOL_DOWN_MS),
            poll_interval: Duration::ZERO,
            scan_mode: ScanMode::SingleLevel,
        }
    }
}

impl ScannerConfig {
    /// Set the presence timeout
    pub fn with_presence_timeout(mut self, timeout: Duration) -> Self {
        self.presence_timeout = timeout;
        self
    }

    /// Set the scan mode
    pub fn with_scan_mode(mut self, mode: ScanMode) -> Self {
        self.scan_mode = mode;
        self
    }

    /// Set the pause between polls
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Drop every emission delay (tests, host-side wedges).
    pub fn without_delays(mut self) -> Self {
        self.keystroke_settle = Duration::ZERO;
        self.beep_duration = Duration::ZERO;
        self.cool_down = Duration::ZERO;
        self
    }
}
