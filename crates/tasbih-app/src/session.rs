//! Counting session - the count, target and active phrase
//!
//! `Session` enforces the count bounds and the stop-on-target guard. It never
//! triggers feedback; the handler turns its outcomes into actions.

use serde::Serialize;
use tasbih_core::{FavoriteEntry, GuardRejection, Phrase, Snapshot, MAX_COUNT};

/// The live counting session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    /// Active phrase; empty means no phrase is selected
    pub phrase_text: String,
    /// Taps so far, in `[0, MAX_COUNT]`
    pub count: u32,
    /// Target count; 0 means no target
    pub target: u32,
}

/// Result of an accepted tap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Increment {
    /// Count before the tap
    pub previous: u32,
    /// Count after the tap
    pub count: u32,
    /// This tap landed exactly on a non-zero target
    pub target_reached: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_target(&self) -> bool {
        self.target > 0
    }

    pub fn has_phrase(&self) -> bool {
        !self.phrase_text.is_empty()
    }

    /// Stop-on-target is active and the target has been reached
    pub fn is_blocked_by_target(&self, stop_on_target: bool) -> bool {
        stop_on_target && self.has_target() && self.count >= self.target
    }

    /// Count one tap.
    ///
    /// The stop-on-target guard is checked before the upper bound. On
    /// rejection the session is left untouched.
    pub fn increment(&mut self, stop_on_target: bool) -> Result<Increment, GuardRejection> {
        if self.is_blocked_by_target(stop_on_target) {
            return Err(GuardRejection::TargetAlreadyReached);
        }
        if self.count >= MAX_COUNT {
            return Err(GuardRejection::MaxCountReached);
        }

        let previous = self.count;
        self.count += 1;

        Ok(Increment {
            previous,
            count: self.count,
            target_reached: self.has_target() && self.count == self.target,
        })
    }

    /// Zero every field, returning what was there
    pub fn reset(&mut self) -> Snapshot {
        let snapshot = Snapshot::full(self.count, self.target, self.phrase_text.clone());
        self.count = 0;
        self.target = 0;
        self.phrase_text.clear();
        snapshot
    }

    /// Begin counting a catalog phrase. An existing target is kept.
    pub fn start(&mut self, phrase: &Phrase) {
        self.phrase_text = phrase.text.clone();
        if self.target == 0 {
            self.target = phrase.suggested_count;
        }
        self.count = 0;
    }

    /// Begin counting a custom phrase. The target is left alone.
    pub fn start_named(&mut self, name: &str) {
        self.phrase_text = name.to_string();
        self.count = 0;
    }

    /// Load a saved favorite verbatim
    pub fn load_favorite(&mut self, entry: &FavoriteEntry) {
        self.phrase_text = entry.key.clone();
        self.count = entry.count;
        self.target = entry.target;
    }

    /// Write back every field the snapshot carries
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.count = snapshot.count;
        if let Some(target) = snapshot.target {
            self.target = target;
        }
        if let Some(phrase_text) = snapshot.phrase_text {
            self.phrase_text = phrase_text;
        }
    }
}
