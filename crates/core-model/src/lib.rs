//! Presentation model: cursor, viewport offset, and the scroller.
//!
//! A `View` owns what the renderer needs to place things on screen (cursor
//! slot, first visible slot, field width) while `InputState` owns editing
//! semantics. Keeping them apart mirrors the buffer/view split upstream and
//! lets snapshot restore thread presentation indices through explicitly.
//!
//! Core invariants (must hold after every `scroll_to_cursor`):
//! * `offset <= cursor`.
//! * `cursor < offset + width + right_margin` for the margin in effect.
//! * Re-running the scroller without a cursor change never moves `offset`.

use core_state::InputState;
use core_text::LineBuffer;
use tracing::trace;

/// Columns kept visible to the left of the cursor while scrolling.
pub const SCROLL_MARGIN_LEFT: usize = 2;
/// Columns kept visible to the right of the cursor; one fewer applies when
/// the cursor rests past the last character (end-of-line append position).
pub const SCROLL_MARGIN_RIGHT: usize = 2;

/// Smallest usable field width: room for both margins plus one content cell.
pub const MIN_FIELD_WIDTH: usize = SCROLL_MARGIN_LEFT + SCROLL_MARGIN_RIGHT + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    pub cursor: usize,
    /// Index of the first character slot visible in the field.
    pub offset: usize,
    /// Visible field width in columns.
    pub width: usize,
}

impl View {
    pub fn new(width: usize) -> Self {
        Self {
            cursor: 0,
            offset: 0,
            width: width.max(MIN_FIELD_WIDTH),
        }
    }

    /// Keep the cursor inside the visible window, applying the asymmetric
    /// margins. Both clamp steps are independent and idempotent; calling
    /// this again without a cursor change leaves `offset` untouched.
    pub fn scroll_to_cursor(&mut self, buffer_len: usize) {
        let right = if self.cursor >= buffer_len {
            SCROLL_MARGIN_RIGHT - 1
        } else {
            SCROLL_MARGIN_RIGHT
        };
        let before = self.offset;
        if self.cursor < self.offset + SCROLL_MARGIN_LEFT {
            self.offset = self.cursor.saturating_sub(SCROLL_MARGIN_LEFT);
        }
        if self.cursor + right > self.offset + self.width {
            self.offset = self.cursor + right - self.width;
        }
        if self.offset != before {
            trace!(
                target: "model.view",
                cursor = self.cursor,
                from = before,
                to = self.offset,
                "scrolled"
            );
        }
    }

}

/// One editing session: engine state plus its presentation.
#[derive(Debug)]
pub struct InputModel {
    pub state: InputState,
    pub view: View,
}

impl InputModel {
    pub fn new(state: InputState, width: usize) -> Self {
        Self {
            state,
            view: View::new(width),
        }
    }

    /// Convenience constructor for a session seeded with `content`.
    pub fn seeded(capacity: usize, history_depth: usize, width: usize, content: &str) -> Self {
        let state = InputState::new(LineBuffer::from_str(capacity, content), history_depth);
        Self::new(state, width)
    }

    /// Re-run the scroller against the live buffer length.
    pub fn scroll(&mut self) {
        self.view.scroll_to_cursor(self.state.buffer().len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroller_pulls_offset_left_with_margin() {
        let mut v = View::new(10);
        v.offset = 8;
        v.cursor = 8;
        v.scroll_to_cursor(30);
        assert_eq!(v.offset, 6, "cursor - left margin");
    }

    #[test]
    fn scroller_pushes_offset_right_with_margin() {
        let mut v = View::new(10);
        v.cursor = 12;
        v.scroll_to_cursor(30);
        // cursor + right margin must fit inside the window.
        assert_eq!(v.offset, 12 + SCROLL_MARGIN_RIGHT - 10);
    }

    #[test]
    fn end_of_buffer_reserves_one_fewer_column() {
        let mut past_end = View::new(10);
        past_end.cursor = 12;
        past_end.scroll_to_cursor(12);
        let mut inside = View::new(10);
        inside.cursor = 12;
        inside.scroll_to_cursor(30);
        assert_eq!(past_end.offset + 1, inside.offset);
    }

    #[test]
    fn scroller_is_idempotent() {
        for (cursor, len) in [(0, 0), (3, 20), (19, 20), (20, 20), (7, 8)] {
            let mut v = View::new(8);
            v.cursor = cursor;
            v.scroll_to_cursor(len);
            let settled = v.offset;
            v.scroll_to_cursor(len);
            assert_eq!(v.offset, settled, "cursor={cursor} len={len}");
        }
    }

    #[test]
    fn scroller_invariants_hold_across_sweep() {
        for len in [0usize, 1, 5, 20, 40] {
            let mut v = View::new(10);
            for cursor in 0..=len {
                v.cursor = cursor;
                v.scroll_to_cursor(len);
                assert!(v.offset <= v.cursor, "offset <= cursor");
                let right = if cursor >= len {
                    SCROLL_MARGIN_RIGHT - 1
                } else {
                    SCROLL_MARGIN_RIGHT
                };
                assert!(
                    v.cursor < v.offset + v.width + right,
                    "cursor inside window, cursor={cursor} len={len}"
                );
            }
        }
    }

    #[test]
    fn width_is_clamped_to_minimum() {
        let v = View::new(1);
        assert_eq!(v.width, MIN_FIELD_WIDTH);
    }

    #[test]
    fn seeded_model_starts_at_origin() {
        let m = InputModel::seeded(20, 8, 10, "hello");
        assert_eq!(m.view.cursor, 0);
        assert_eq!(m.view.offset, 0);
        assert_eq!(m.state.buffer().content(), "hello");
        assert_eq!(m.state.history().len(), 1);
    }
}
