//! Motion sub-dispatch (cursor movement).
//!
//! Pure cursor movement: no buffer mutation, no history commits. Word
//! queries delegate to `core_text::motion`; the result is assigned to the
//! live cursor and the scroller re-runs. In Visual mode the anchor stays
//! fixed and only the cursor moves, so the same table serves both modes.
//!
//! One mode-sensitive rule lives here: `Right` in Insert mode may rest one
//! past the last character (the append position), while Normal and Visual
//! clamp to the last occupied slot.

use super::DispatchResult;
use crate::MotionKind;
use core_model::InputModel;
use core_state::Mode;
use core_text::motion;

pub(crate) fn handle_motion(kind: MotionKind, model: &mut InputModel) -> DispatchResult {
    let buf = model.state.buffer();
    let before = model.view.cursor;
    let cursor = before.min(buf.len());
    let next = match kind {
        MotionKind::Left => motion::left(cursor),
        MotionKind::Right => {
            if model.state.mode == Mode::Insert {
                if cursor < buf.len() { cursor + 1 } else { cursor }
            } else {
                motion::right(buf, cursor)
            }
        }
        MotionKind::LineStart => motion::line_start(),
        MotionKind::LineEnd => motion::line_end(buf),
        MotionKind::WordStart { full } => motion::word_start(buf, cursor, full),
        MotionKind::WordEnd { full } => motion::word_end(buf, cursor, full),
        MotionKind::WordBack { full } => motion::word_back(buf, cursor, full),
    };
    model.view.cursor = next;
    model.scroll();
    if next != before {
        tracing::trace!(target: "actions.dispatch", motion = ?kind, from = before, to = next, "motion");
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}
