//! Visual selection operations.
//!
//! The selection is the inclusive slot range between the fixed anchor
//! (captured on entering Visual mode) and the live cursor, in either order.
//! Every operation collapses back to Normal mode, drops the anchor, lands
//! the cursor on the range start clamped into the new bounds, and commits.

use super::DispatchResult;
use crate::VisualOp;
use core_model::InputModel;
use core_state::Mode;

pub(crate) fn handle_visual(op: VisualOp, model: &mut InputModel) -> DispatchResult {
    let state = &mut model.state;
    let view = &mut model.view;
    if state.mode != Mode::Visual {
        return DispatchResult::clean();
    }
    let Some(anchor) = state.anchor.take() else {
        state.mode = Mode::Normal;
        return DispatchResult::clean();
    };
    let start = view.cursor.min(anchor);
    let end = view.cursor.max(anchor);
    match op {
        VisualOp::Delete => {
            let removed = state.buffer_mut().remove_range(start, end);
            tracing::trace!(target: "actions.dispatch", op = "visual_delete", start, end, removed, "visual");
        }
        VisualOp::Lowercase => {
            state
                .buffer_mut()
                .map_range(start, end, |c| c.to_ascii_lowercase());
            tracing::trace!(target: "actions.dispatch", op = "visual_lowercase", start, end, "visual");
        }
        VisualOp::Uppercase => {
            state
                .buffer_mut()
                .map_range(start, end, |c| c.to_ascii_uppercase());
            tracing::trace!(target: "actions.dispatch", op = "visual_uppercase", start, end, "visual");
        }
    }
    view.cursor = state.clamp_cursor(start);
    state.mode = Mode::Normal;
    state.commit(view.cursor, view.offset);
    model.scroll();
    DispatchResult::dirty()
}
