//! Dispatcher applying `Action` to an `InputModel`.
//!
//! Decomposed into focused sub-modules:
//! * `motion` - cursor movement semantics (shared by Normal and Visual)
//! * `mode`   - mode transitions and their cursor placement rules
//! * `edit`   - buffer mutation (insert/backspace/delete/truncate/replace)
//! * `visual` - selection-range operations (delete, case change)
//! * `undo`   - undo / redo dispatch
//!
//! Every arm leaves the model satisfying the engine invariants: cursor
//! within bounds for the active mode, scroller re-run after any cursor
//! change, and a history commit after each commit-worthy edit (the history
//! layer dedups, so no-op edits never grow it).

use crate::Action;
use core_model::InputModel;

mod edit;
mod mode;
mod motion;
mod undo;
mod visual;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// The screen needs a redraw.
    pub dirty: bool,
    /// The session is over; nothing gets persisted.
    pub quit: bool,
    /// The session is over; the host persists the live buffer.
    pub submit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
            submit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
            submit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: false,
            quit: true,
            submit: false,
        }
    }
    pub fn submit() -> Self {
        Self {
            dirty: false,
            quit: true,
            submit: true,
        }
    }

    /// True once the host should stop feeding keys.
    pub fn finished(&self) -> bool {
        self.quit
    }
}

/// Apply one action to the model. Total over its input domain: every arm
/// handles out-of-range and empty-buffer situations by clamping or by
/// doing nothing, never by failing.
pub fn dispatch(action: Action, model: &mut InputModel) -> DispatchResult {
    match action {
        Action::Motion(kind) => motion::handle_motion(kind, model),
        Action::ModeChange(mc) => mode::handle_mode_change(mc, model),
        Action::Edit(kind) => edit::handle_edit(kind, model),
        Action::Visual(op) => visual::handle_visual(op, model),
        Action::Undo => undo::handle_undo(model),
        Action::Redo => undo::handle_redo(model),
        Action::Quit => {
            tracing::debug!(target: "actions.dispatch", "quit");
            DispatchResult::quit()
        }
        Action::Submit => {
            tracing::debug!(
                target: "actions.dispatch",
                len = model.state.buffer().len(),
                "submit"
            );
            DispatchResult::submit()
        }
    }
}
