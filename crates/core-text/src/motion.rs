//! Cursor motion primitives.
//!
//! These operate purely on a `LineBuffer` + cursor index pair and are free of
//! mode or viewport state; the dispatcher assigns the returned index to the
//! live cursor. Word queries implement vi's word/WORD split: plain motions
//! (`w`/`e`/`b`) stop at alphanumeric/punctuation class boundaries, while the
//! `full_word` variants (`W`/`E`/`B`) treat any contiguous non-blank run as a
//! single unit.
//!
//! All queries are total: out-of-range cursors and empty buffers produce a
//! clamped in-range index, never a panic.

use crate::LineBuffer;

fn is_blank(c: char) -> bool {
    c.is_whitespace()
}

/// The "word" character class. Everything that is neither blank nor
/// alphanumeric counts as punctuation, the opposing class.
fn is_word(c: char) -> bool {
    c.is_alphanumeric()
}

/// Move left one slot, stopping at the first.
pub fn left(cursor: usize) -> usize {
    cursor.saturating_sub(1)
}

/// Move right one slot, resting on the last occupied slot.
pub fn right(buf: &LineBuffer, cursor: usize) -> usize {
    if !buf.is_empty() && cursor + 1 < buf.len() {
        cursor + 1
    } else {
        cursor
    }
}

/// Jump to the first slot (`0`, `^`, `_`).
pub fn line_start() -> usize {
    0
}

/// Jump to the last occupied slot (`$`). Cursor never exceeds `len - 1`
/// while the buffer is non-empty.
pub fn line_end(buf: &LineBuffer) -> usize {
    buf.len().saturating_sub(1)
}

/// Start of the next word (`w`/`W`).
///
/// From a blank slot this lands on the next non-blank character. From a
/// word slot it stops at the first non-blank after a blank run, or, unless
/// `full_word`, at the first character of the opposing class. No boundary
/// before the end lands on the last slot.
pub fn word_start(buf: &LineBuffer, cursor: usize, full_word: bool) -> usize {
    if buf.is_empty() {
        return 0;
    }
    let last = buf.len() - 1;
    if cursor + 1 >= buf.len() {
        return last;
    }
    let chars = buf.chars();
    if is_blank(chars[cursor]) {
        for (i, &c) in chars.iter().enumerate().skip(cursor + 1) {
            if !is_blank(c) {
                return i;
            }
        }
        return last;
    }
    let start_class = is_word(chars[cursor]);
    let mut crossed_blank = false;
    for (i, &c) in chars.iter().enumerate().skip(cursor + 1) {
        if is_blank(c) {
            crossed_blank = true;
            continue;
        }
        if crossed_blank {
            return i;
        }
        if !full_word && is_word(c) != start_class {
            return i;
        }
    }
    last
}

/// End of the current or next word (`e`/`E`).
///
/// Always advances at least one slot, skips a leading blank run, then runs
/// to the slot just before the next blank or (unless `full_word`) class
/// transition.
pub fn word_end(buf: &LineBuffer, cursor: usize, full_word: bool) -> usize {
    if buf.is_empty() {
        return 0;
    }
    let last = buf.len() - 1;
    if cursor + 1 >= buf.len() {
        return last;
    }
    let chars = buf.chars();
    let mut i = cursor + 1;
    while i < chars.len() && is_blank(chars[i]) {
        i += 1;
    }
    if i >= chars.len() {
        return last;
    }
    let class = is_word(chars[i]);
    let mut j = i + 1;
    while j < chars.len() {
        let c = chars[j];
        if is_blank(c) || (!full_word && is_word(c) != class) {
            return j - 1;
        }
        j += 1;
    }
    last
}

/// Start of the previous word (`b`/`B`).
///
/// Steps back one slot, skips a blank run, then walks back through the run
/// of the resulting class, landing one past the boundary (or 0 when the
/// run reaches the start).
pub fn word_back(buf: &LineBuffer, cursor: usize, full_word: bool) -> usize {
    if cursor <= 1 || buf.is_empty() {
        return 0;
    }
    let chars = buf.chars();
    let mut i = cursor.min(chars.len()) - 1;
    while i > 0 && is_blank(chars[i]) {
        i -= 1;
    }
    if i == 0 {
        return 0;
    }
    let class = is_word(chars[i]);
    while i > 0 {
        let prev = chars[i - 1];
        if is_blank(prev) || (!full_word && is_word(prev) != class) {
            return i;
        }
        i -= 1;
    }
    0
}
