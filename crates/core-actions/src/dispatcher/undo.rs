//! Undo / redo dispatch.
//!
//! Thin delegation into the snapshot history owned by `InputState`; the
//! restored cursor/offset come from the snapshot itself and the scroller
//! re-runs afterwards so the width invariant holds even if the field width
//! changed since the snapshot was taken.

use super::DispatchResult;
use core_model::InputModel;

pub(crate) fn handle_undo(model: &mut InputModel) -> DispatchResult {
    let (view, state) = (&mut model.view, &mut model.state);
    if state.undo(&mut view.cursor, &mut view.offset) {
        tracing::trace!(target: "actions.dispatch", op = "undo", len = state.buffer().len(), "undo");
        model.scroll();
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}

pub(crate) fn handle_redo(model: &mut InputModel) -> DispatchResult {
    let (view, state) = (&mut model.view, &mut model.state);
    if state.redo(&mut view.cursor, &mut view.offset) {
        tracing::trace!(target: "actions.dispatch", op = "redo", len = state.buffer().len(), "redo");
        model.scroll();
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}
