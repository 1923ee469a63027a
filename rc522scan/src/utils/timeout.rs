//! Timing defaults for the presence loop.
//!
//! Keep these helpers minimal: they centralize the delays used by the
//! scanner and provide a small conversion helper so tests and code can
//! express timeouts in milliseconds clearly.

use std::time::Duration;

/// How long a tag may be absent before its identifier may be reported again.
pub const DEFAULT_PRESENCE_TIMEOUT_MS: u64 = 1000;

/// Pause between typing the identifier and pressing Enter.
pub const DEFAULT_KEYSTROKE_SETTLE_MS: u64 = 100;

/// Length of the confirmation beep.
pub const DEFAULT_BEEP_MS: u64 = 200;

/// Pause after an event before polling resumes.
pub const DEFAULT_COOL_DOWN_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default presence timeout as Duration.
pub fn default_presence_timeout() -> Duration {
    ms(DEFAULT_PRESENCE_TIMEOUT_MS)
}
