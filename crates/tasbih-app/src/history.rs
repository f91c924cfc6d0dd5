//! Single-slot undo buffer

use tasbih_core::Snapshot;

/// Holds at most one snapshot. A new capture overwrites the old one.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    slot: Option<Snapshot>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capture(&mut self, snapshot: Snapshot) {
        self.slot = Some(snapshot);
    }

    /// Remove and return the snapshot, leaving the slot empty
    pub fn take(&mut self) -> Option<Snapshot> {
        self.slot.take()
    }

    pub fn peek(&self) -> Option<&Snapshot> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_overwrites() {
        let mut history = HistoryStack::new();
        history.capture(Snapshot::count_only(1));
        history.capture(Snapshot::count_only(2));
        assert_eq!(history.take(), Some(Snapshot::count_only(2)));
        assert!(history.is_empty());
        assert_eq!(history.take(), None);
    }
}
