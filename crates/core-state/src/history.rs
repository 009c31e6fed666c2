//! Bounded undo/redo history.
//!
//! A ring of committed `Snapshot`s with an index pointer. `index` counts the
//! committed states up to and including the live one, so after any commit the
//! live buffer equals the top entry and `index == len`. The seed entry pushed
//! at engine construction is the undo floor.
//!
//! Invariants (must hold after every public call):
//! * `0 <= index <= len() <= capacity`.
//! * Overflow evicts the oldest entry; `len()` never exceeds capacity.
//! * A push whose content equals the top entry's is a no-op (dedup), so
//!   mode switches and cursor motion never grow the history.
//!
//! Eviction is O(1): the storage is a `VecDeque` rather than a shift-left
//! array, with the oldest entry silently dropped from the front.

use core_text::LineBuffer;
use std::collections::VecDeque;
use tracing::trace;

/// Point-in-time capture of buffer content plus presentation indices.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub text: LineBuffer,
    pub cursor: usize,
    pub offset: usize,
}

impl Snapshot {
    pub fn new(text: LineBuffer, cursor: usize, offset: usize) -> Self {
        Self {
            text,
            cursor,
            offset,
        }
    }
}

#[derive(Debug)]
pub struct History {
    entries: VecDeque<Snapshot>,
    index: usize,
    cap: usize,
}

impl History {
    pub fn new(cap: usize) -> Self {
        let cap = cap.max(1);
        Self {
            entries: VecDeque::with_capacity(cap),
            index: 0,
            cap,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Count of committed states up to the live one.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Commit a snapshot. Skips the push entirely when content matches the
    /// entry the live state corresponds to, discards any redo branch beyond
    /// `index`, and evicts the oldest entry once the ring is full. Returns
    /// whether an entry was actually stored.
    ///
    /// The dedup check runs against `entries[index - 1]`, not the back of
    /// the ring, and runs before the redo branch is touched: a no-op commit
    /// after an undo must leave the redo branch intact.
    pub fn push(&mut self, snap: Snapshot) -> bool {
        if let Some(current) = self.index.checked_sub(1).and_then(|i| self.entries.get(i))
            && current.text == snap.text
        {
            trace!(target: "state.history", index = self.index, "snapshot_dedupe_skip");
            return false;
        }
        if self.index < self.entries.len() {
            self.entries.truncate(self.index);
            trace!(target: "state.history", len = self.entries.len(), "redo_branch_discarded");
        }
        if self.entries.len() == self.cap {
            self.entries.pop_front();
            self.index = self.index.saturating_sub(1);
            trace!(target: "state.history", cap = self.cap, "oldest_entry_evicted");
        }
        self.entries.push_back(snap);
        self.index = self.entries.len();
        trace!(target: "state.history", len = self.entries.len(), index = self.index, "push");
        true
    }

    /// Step back one committed state. The seed entry is the floor; with
    /// nothing older than the live state this is a silent no-op.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.index < 2 {
            return None;
        }
        self.index -= 1;
        trace!(target: "state.history", index = self.index, "undo");
        self.entries.get(self.index - 1)
    }

    /// Step forward along the redo branch, if one exists.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if self.index >= self.entries.len() {
            return None;
        }
        self.index += 1;
        trace!(target: "state.history", index = self.index, "redo");
        self.entries.get(self.index - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(s: &str, cursor: usize) -> Snapshot {
        Snapshot::new(LineBuffer::from_str(32, s), cursor, 0)
    }

    #[test]
    fn push_undo_redo_round_trip() {
        let mut h = History::new(8);
        assert!(h.push(snap("", 0)));
        assert!(h.push(snap("hi", 1)));
        let before = h.entries.back().unwrap().text.content();
        let restored = h.undo().unwrap().text.content();
        assert_eq!(restored, "");
        let redone = h.redo().unwrap().text.content();
        assert_eq!(redone, before);
        assert_eq!(h.index(), 2);
    }

    #[test]
    fn undo_stops_at_seed() {
        let mut h = History::new(8);
        h.push(snap("", 0));
        assert!(h.undo().is_none(), "seed alone has nothing to undo to");
        h.push(snap("a", 0));
        assert!(h.undo().is_some());
        assert!(h.undo().is_none());
    }

    #[test]
    fn redo_without_branch_is_noop() {
        let mut h = History::new(8);
        h.push(snap("", 0));
        h.push(snap("a", 0));
        assert!(h.redo().is_none());
    }

    #[test]
    fn duplicate_content_is_not_stored() {
        let mut h = History::new(8);
        h.push(snap("abc", 0));
        let stored = h.push(snap("abc", 2));
        assert!(!stored, "same content, different cursor must dedup");
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn push_truncates_redo_branch() {
        let mut h = History::new(8);
        h.push(snap("", 0));
        h.push(snap("a", 0));
        h.push(snap("ab", 1));
        h.undo();
        h.undo();
        assert_eq!(h.index(), 1);
        h.push(snap("x", 0));
        assert_eq!(h.len(), 2);
        assert_eq!(h.index(), 2);
        assert!(h.redo().is_none(), "old branch must be gone");
        assert_eq!(h.undo().unwrap().text.content(), "");
    }

    #[test]
    fn capacity_bound_keeps_most_recent_window() {
        let cap = 4;
        let mut h = History::new(cap);
        for i in 0..cap + 3 {
            assert!(h.push(snap(&format!("s{i}"), 0)));
        }
        assert_eq!(h.len(), cap);
        assert_eq!(h.index(), cap);
        // Surviving window is exactly the most recent `cap` commits.
        let window: Vec<String> = h.entries.iter().map(|s| s.text.content()).collect();
        assert_eq!(window, vec!["s3", "s4", "s5", "s6"]);
    }

    #[test]
    fn noop_push_after_undo_keeps_redo_branch() {
        let mut h = History::new(8);
        h.push(snap("", 0));
        h.push(snap("a", 0));
        h.undo();
        // The live state equals the seed entry; pushing it again must dedup
        // without touching the redo branch holding "a".
        assert!(!h.push(snap("", 0)));
        assert_eq!(h.len(), 2);
        assert_eq!(h.index(), 1);
        assert_eq!(h.redo().unwrap().text.content(), "a");
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut h = History::new(0);
        assert_eq!(h.capacity(), 1);
        assert!(h.push(snap("a", 0)));
        assert!(h.push(snap("b", 0)));
        assert_eq!(h.len(), 1);
    }
}
