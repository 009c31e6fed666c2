//! Text edit action handling.
//!
//! Mutations go through the `LineBuffer` shift operations; this module adds
//! the mode guards, cursor bookkeeping, and commit decisions. Discrete
//! Normal-mode edits (`x`, `D`) and Replace overwrites commit immediately;
//! Insert-mode edits accumulate and are committed as one step when Escape
//! returns to Normal (see `mode.rs`).
//!
//! Capacity overflow on insert is a silent no-op per the engine's error
//! policy: no mutation, no signal, a clean dispatch result.

use super::DispatchResult;
use crate::EditKind;
use core_model::InputModel;
use core_state::Mode;

pub(crate) fn handle_edit(kind: EditKind, model: &mut InputModel) -> DispatchResult {
    let state = &mut model.state;
    let view = &mut model.view;
    match kind {
        EditKind::InsertChar(c) => {
            if state.mode != Mode::Insert {
                return DispatchResult::clean();
            }
            if !state.buffer_mut().insert(view.cursor, c) {
                tracing::trace!(target: "actions.dispatch", op = "insert_char", "buffer_full");
                return DispatchResult::clean();
            }
            view.cursor += 1;
            model.scroll();
            DispatchResult::dirty()
        }
        EditKind::Backspace => {
            if state.mode != Mode::Insert || view.cursor == 0 {
                return DispatchResult::clean();
            }
            state.buffer_mut().remove(view.cursor - 1);
            view.cursor -= 1;
            model.scroll();
            DispatchResult::dirty()
        }
        EditKind::DeleteUnder => {
            if state.mode != Mode::Normal || state.buffer().is_empty() {
                return DispatchResult::clean();
            }
            let at = view.cursor;
            state.buffer_mut().remove(at);
            view.cursor = state.clamp_cursor(at);
            state.commit(view.cursor, view.offset);
            tracing::trace!(target: "actions.dispatch", op = "delete_under", at, "edit");
            model.scroll();
            DispatchResult::dirty()
        }
        EditKind::TruncateToEnd => {
            if state.mode != Mode::Normal || view.cursor >= state.buffer().len() {
                return DispatchResult::clean();
            }
            let at = view.cursor;
            state.buffer_mut().truncate(at);
            view.cursor = state.clamp_cursor(at);
            state.commit(view.cursor, view.offset);
            tracing::trace!(target: "actions.dispatch", op = "truncate", at, "edit");
            model.scroll();
            DispatchResult::dirty()
        }
        EditKind::ReplaceChar(c) => {
            if state.mode != Mode::Replace {
                return DispatchResult::clean();
            }
            let overwritten = state.buffer_mut().replace(view.cursor, c);
            state.mode = Mode::Normal;
            if overwritten {
                state.commit(view.cursor, view.offset);
                tracing::trace!(target: "actions.dispatch", op = "replace_char", at = view.cursor, "edit");
            }
            model.scroll();
            DispatchResult::dirty()
        }
    }
}
