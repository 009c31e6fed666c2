//! Key-driven actions: the vocabulary between raw key events and state
//! mutation, plus the translation and dispatch layers that speak it.
//!
//! Flow per keystroke: the host decodes a device event into a
//! `core_events::KeyEvent`, `translate_key` maps `(mode, key)` to an
//! `Action` (or drops the key), and `dispatch` applies the action to an
//! `InputModel`, re-running the viewport scroller and committing to history
//! where the operation warrants it.

use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_state::Mode;

pub mod dispatcher;
pub use dispatcher::{DispatchResult, dispatch};

/// Cursor movement requests. Word motions carry the WORD flag: `true`
/// treats any contiguous non-blank run as one unit (`W`/`E`/`B`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    LineStart,
    LineEnd,
    WordStart { full: bool },
    WordEnd { full: bool },
    WordBack { full: bool },
}

/// Buffer mutation requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Insert before the cursor (Insert mode printable).
    InsertChar(char),
    /// Delete the character before the cursor (Insert mode).
    Backspace,
    /// Delete the character under the cursor (`x`).
    DeleteUnder,
    /// Drop everything from the cursor to the end (`D`).
    TruncateToEnd,
    /// Overwrite the cell under the cursor (Replace mode printable).
    ReplaceChar(char),
}

/// Mode transition requests, including the cursor placement each entry key
/// implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    /// `i`: insert before the cursor.
    EnterInsert,
    /// `a`: insert after the cursor.
    EnterInsertAfter,
    /// `I`: insert at the start of the line.
    EnterInsertLineStart,
    /// `A`: insert past the last character.
    EnterInsertLineEnd,
    /// `r`: overwrite the next printable.
    EnterReplace,
    /// `v`: select from the current cursor.
    EnterVisual,
    /// `V`: select the whole line.
    EnterVisualLine,
    /// Escape from whatever mode is active.
    LeaveToNormal,
}

/// Operations on the Visual selection range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualOp {
    Delete,
    Lowercase,
    Uppercase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Edit(EditKind),
    ModeChange(ModeChange),
    Visual(VisualOp),
    Undo,
    Redo,
    /// End the session without persisting (`q`).
    Quit,
    /// End the session and hand the buffer to the persistence collaborator.
    Submit,
}

/// Map `(mode, key)` to an `Action`. Unrecognized keys yield `None` and are
/// dropped silently; the translation itself never mutates anything.
pub fn translate_key(mode: Mode, key: &KeyEvent) -> Option<Action> {
    // Ctrl chords are checked before printable interpretation so Ctrl-R
    // never reads as an `r` replace entry.
    if key.mods.contains(KeyModifiers::CTRL) {
        if mode == Mode::Normal && key.code == KeyCode::Char('r') {
            return Some(Action::Redo);
        }
        return None;
    }
    match mode {
        Mode::Normal => translate_normal(key),
        Mode::Insert => translate_insert(key),
        Mode::Replace => translate_replace(key),
        Mode::Visual => translate_visual(key),
    }
}

/// Motion keys shared by Normal and Visual mode.
fn translate_motion(key: &KeyEvent) -> Option<Action> {
    let kind = match key.code {
        KeyCode::Left => MotionKind::Left,
        KeyCode::Right => MotionKind::Right,
        KeyCode::Char('h') => MotionKind::Left,
        KeyCode::Char('l') => MotionKind::Right,
        KeyCode::Char('w') => MotionKind::WordStart { full: false },
        KeyCode::Char('W') => MotionKind::WordStart { full: true },
        KeyCode::Char('e') => MotionKind::WordEnd { full: false },
        KeyCode::Char('E') => MotionKind::WordEnd { full: true },
        KeyCode::Char('b') => MotionKind::WordBack { full: false },
        KeyCode::Char('B') => MotionKind::WordBack { full: true },
        KeyCode::Char('^' | '_' | '0') => MotionKind::LineStart,
        KeyCode::Char('$') => MotionKind::LineEnd,
        _ => return None,
    };
    Some(Action::Motion(kind))
}

fn translate_normal(key: &KeyEvent) -> Option<Action> {
    if let Some(motion) = translate_motion(key) {
        return Some(motion);
    }
    match key.code {
        KeyCode::Char('i') => Some(Action::ModeChange(ModeChange::EnterInsert)),
        KeyCode::Char('a') => Some(Action::ModeChange(ModeChange::EnterInsertAfter)),
        KeyCode::Char('I') => Some(Action::ModeChange(ModeChange::EnterInsertLineStart)),
        KeyCode::Char('A') => Some(Action::ModeChange(ModeChange::EnterInsertLineEnd)),
        KeyCode::Char('r') => Some(Action::ModeChange(ModeChange::EnterReplace)),
        KeyCode::Char('v') => Some(Action::ModeChange(ModeChange::EnterVisual)),
        KeyCode::Char('V') => Some(Action::ModeChange(ModeChange::EnterVisualLine)),
        KeyCode::Char('D') => Some(Action::Edit(EditKind::TruncateToEnd)),
        KeyCode::Char('x') => Some(Action::Edit(EditKind::DeleteUnder)),
        KeyCode::Char('u') => Some(Action::Undo),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Submit),
        _ => None,
    }
}

fn translate_insert(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::ModeChange(ModeChange::LeaveToNormal)),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::Edit(EditKind::Backspace)),
        KeyCode::Left => Some(Action::Motion(MotionKind::Left)),
        KeyCode::Right => Some(Action::Motion(MotionKind::Right)),
        KeyCode::Char(c) if !c.is_control() => Some(Action::Edit(EditKind::InsertChar(c))),
        _ => None,
    }
}

fn translate_replace(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::ModeChange(ModeChange::LeaveToNormal)),
        KeyCode::Char(c) if !c.is_control() => Some(Action::Edit(EditKind::ReplaceChar(c))),
        _ => None,
    }
}

fn translate_visual(key: &KeyEvent) -> Option<Action> {
    // `u`/`U` are case operators inside Visual, so the selection-specific
    // keys are matched before the shared motion table (which has no
    // overlap) purely for clarity of precedence.
    match key.code {
        KeyCode::Esc => return Some(Action::ModeChange(ModeChange::LeaveToNormal)),
        KeyCode::Char('x' | 'd') => return Some(Action::Visual(VisualOp::Delete)),
        KeyCode::Char('u') => return Some(Action::Visual(VisualOp::Lowercase)),
        KeyCode::Char('U') => return Some(Action::Visual(VisualOp::Uppercase)),
        _ => {}
    }
    translate_motion(key)
}
