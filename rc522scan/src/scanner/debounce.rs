// rc522scan/src/scanner/debounce.rs

//! Presence debouncer: turns repeated reads into one event per tag visit.

use std::time::{Duration, Instant};

use log::debug;

use crate::types::Uid;

/// A tag that was not being tracked has appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEvent {
    /// Identifier as read
    pub uid: Uid,
    /// Uppercase hex, as typed out
    pub text: String,
}

/// Two scalar fields stand in for the Idle / Present states: an empty
/// identifier is Idle.
#[derive(Debug, Clone)]
pub struct Debouncer {
    last: String,
    last_seen: Option<Instant>,
    timeout: Duration,
}

impl Debouncer {
    /// Idle debouncer forgetting tags after `timeout` of absence
    pub fn new(timeout: Duration) -> Self {
        Self {
            last: String::new(),
            last_seen: None,
            timeout,
        }
    }

    /// Feed one poll result. `None` means the wake-up request went
    /// unanswered or failed; it only forgets the tracked tag once the
    /// timeout has passed since the tag was last confirmed. A tag that
    /// answers but cannot be read is not reported here at all.
    pub fn observe(&mut self, reading: Option<&Uid>, now: Instant) -> Option<TagEvent> {
        let Some(uid) = reading else {
            if self.expired(now) && !self.last.is_empty() {
                debug!("tag {} gone", self.last);
                self.last.clear();
            }
            return None;
        };

        let hex = uid.to_hex();
        let event = if hex != self.last {
            self.last = hex;
            Some(TagEvent {
                uid: *uid,
                text: uid.to_string(),
            })
        } else {
            None
        };
        self.touch(now);
        event
    }

    /// Record that the tracked tag was confirmed at `now`.
    pub fn touch(&mut self, now: Instant) {
        self.last_seen = Some(now);
    }

    /// Tracked identifier in lowercase hex, `None` when Idle
    pub fn last_identifier(&self) -> Option<&str> {
        if self.last.is_empty() {
            None
        } else {
            Some(&self.last)
        }
    }

    /// Present state: a tag is being tracked
    pub fn is_present(&self) -> bool {
        !self.last.is_empty()
    }

    fn expired(&self, now: Instant) -> bool {
        match self.last_seen {
            Some(seen) => now.saturating_duration_since(seen) > self.timeout,
            None => true,
        }
    }
}
