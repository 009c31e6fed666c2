//! Editing-engine state: mode, live buffer, visual anchor, undo history.
//!
//! `InputState` owns everything keystroke dispatch mutates except the
//! presentation indices (cursor and viewport offset), which live in the
//! view layer and are threaded through commit/undo calls so snapshots can
//! capture and restore them.
//!
//! Core invariants (must hold after every public call):
//! * `anchor` is `Some` exactly while `mode == Mode::Visual`, and the
//!   anchored index is within the buffer bounds captured on entry.
//! * The history always holds at least the seed entry pushed at
//!   construction, so the first real edit is undoable.
//! * Every operation here is total: nothing returns an error, exhausted
//!   undo/redo and capacity overflow are silent no-ops.

use core_text::LineBuffer;
use tracing::trace;

mod history;
pub use history::{History, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
    Replace,
    Visual,
}

impl Mode {
    /// Status-line label.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Replace => "REPLACE",
            Mode::Visual => "VISUAL",
        }
    }
}

#[derive(Debug)]
pub struct InputState {
    buffer: LineBuffer,
    pub mode: Mode,
    /// Fixed endpoint of the Visual selection, set on entering Visual mode.
    pub anchor: Option<usize>,
    history: History,
    /// Shown dimmed by the renderer while the buffer is empty.
    pub placeholder: Option<String>,
}

impl InputState {
    /// Build the engine state around an initial buffer and seed the history
    /// with one committed entry so undo has a floor to return to.
    pub fn new(buffer: LineBuffer, history_depth: usize) -> Self {
        let mut history = History::new(history_depth);
        history.push(Snapshot::new(buffer.clone(), 0, 0));
        Self {
            buffer,
            mode: Mode::Normal,
            anchor: None,
            history,
            placeholder: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: Option<String>) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut LineBuffer {
        &mut self.buffer
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Last valid Normal-mode cursor slot: `len - 1`, or 0 when empty.
    pub fn last_slot(&self) -> usize {
        self.buffer.len().saturating_sub(1)
    }

    /// Clamp an arbitrary index into the Normal-mode cursor range.
    pub fn clamp_cursor(&self, cursor: usize) -> usize {
        cursor.min(self.last_slot())
    }

    /// Commit the live state to history. Dedup in the history layer makes
    /// this safe to call after any potentially-mutating operation; a no-op
    /// edit never grows the history.
    pub fn commit(&mut self, cursor: usize, offset: usize) -> bool {
        self.history
            .push(Snapshot::new(self.buffer.clone(), cursor, offset))
    }

    /// Restore the previous committed state into the live buffer, clamping
    /// the restored cursor/offset against its own length. Returns `false`
    /// when there is nothing to undo.
    pub fn undo(&mut self, cursor: &mut usize, offset: &mut usize) -> bool {
        let Some(snap) = self.history.undo() else {
            return false;
        };
        let (buffer, c, o) = restore_indices(snap);
        self.buffer = buffer;
        *cursor = c;
        *offset = o;
        trace!(target: "state.history", len = self.buffer.len(), cursor = c, "undo_applied");
        true
    }

    /// Re-apply the next committed state along the redo branch, if any.
    pub fn redo(&mut self, cursor: &mut usize, offset: &mut usize) -> bool {
        let Some(snap) = self.history.redo() else {
            return false;
        };
        let (buffer, c, o) = restore_indices(snap);
        self.buffer = buffer;
        *cursor = c;
        *offset = o;
        trace!(target: "state.history", len = self.buffer.len(), cursor = c, "redo_applied");
        true
    }
}

/// Clone a snapshot back out with its cursor/offset clamped into the
/// snapshot's own bounds. Stored snapshots are already consistent; the clamp
/// restores the invariant even for a hand-built one.
fn restore_indices(snap: &Snapshot) -> (LineBuffer, usize, usize) {
    let cursor = snap.cursor.min(snap.text.len().saturating_sub(1));
    let offset = snap.offset.min(cursor);
    (snap.text.clone(), cursor, offset)
}
