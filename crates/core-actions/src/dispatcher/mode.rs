//! Mode transition handling.
//!
//! Each entry key carries its own cursor placement rule (spelled out on the
//! `ModeChange` variants); leaving back to Normal is where Insert-run edits
//! get committed. Mode switches without a content change never grow the
//! history: the commit path dedups on content.

use super::DispatchResult;
use crate::ModeChange;
use core_model::InputModel;
use core_state::Mode;

pub(crate) fn handle_mode_change(mc: ModeChange, model: &mut InputModel) -> DispatchResult {
    let state = &mut model.state;
    let view = &mut model.view;
    match mc {
        ModeChange::EnterInsert => {
            state.mode = Mode::Insert;
        }
        ModeChange::EnterInsertAfter => {
            state.mode = Mode::Insert;
            // Append position: cursor may rest at len while inserting.
            if view.cursor < state.buffer().len() {
                view.cursor += 1;
            }
        }
        ModeChange::EnterInsertLineStart => {
            state.mode = Mode::Insert;
            view.cursor = 0;
            view.offset = 0;
        }
        ModeChange::EnterInsertLineEnd => {
            state.mode = Mode::Insert;
            view.cursor = state.buffer().len();
        }
        ModeChange::EnterReplace => {
            state.mode = Mode::Replace;
        }
        ModeChange::EnterVisual => {
            view.cursor = state.clamp_cursor(view.cursor);
            state.anchor = Some(view.cursor);
            state.mode = Mode::Visual;
        }
        ModeChange::EnterVisualLine => {
            state.anchor = Some(0);
            view.cursor = state.last_slot();
            state.mode = Mode::Visual;
        }
        ModeChange::LeaveToNormal => match state.mode {
            Mode::Insert => {
                // Vim parity: cursor retreats one cell, floored at 0, and
                // the whole insert run becomes one undo step.
                view.cursor = state.clamp_cursor(view.cursor.saturating_sub(1));
                state.mode = Mode::Normal;
                state.commit(view.cursor, view.offset);
            }
            Mode::Replace => {
                state.mode = Mode::Normal;
            }
            Mode::Visual => {
                state.anchor = None;
                state.mode = Mode::Normal;
            }
            Mode::Normal => return DispatchResult::clean(),
        },
    }
    model.scroll();
    tracing::trace!(
        target: "actions.dispatch",
        change = ?mc,
        mode = model.state.mode.name(),
        cursor = model.view.cursor,
        "mode_change"
    );
    DispatchResult::dirty()
}
