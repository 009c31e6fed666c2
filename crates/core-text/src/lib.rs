//! Bounded single-line text storage.
//!
//! `LineBuffer` models a fixed-capacity run of single-width character slots.
//! Capacity is set at construction and never grows; the backing vector is
//! pre-allocated so steady-state editing performs no allocation. Edits that
//! shift the tail (insert-at, remove-at, remove-range) express vi's
//! "characters slide over" contract as explicit operations rather than
//! leaking index arithmetic to callers.
//!
//! Core invariants (must hold after every public call):
//! * `len() <= capacity()`.
//! * Slots `[0, len())` hold content; nothing beyond `len()` is observable.
//! * An insert into a full buffer is a silent no-op (returns `false`),
//!   never a panic or an error.

pub mod motion;

#[derive(Debug, Clone)]
pub struct LineBuffer {
    chars: Vec<char>,
    cap: usize,
}

/// Content equality only: two buffers compare equal when their character
/// sequences match, regardless of capacity. History deduplication relies on
/// exactly this notion.
impl PartialEq for LineBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.chars == other.chars
    }
}

impl Eq for LineBuffer {}

impl LineBuffer {
    pub fn new(cap: usize) -> Self {
        Self {
            chars: Vec::with_capacity(cap),
            cap,
        }
    }

    /// Seed a buffer from existing text, keeping at most `cap` characters.
    pub fn from_str(cap: usize, content: &str) -> Self {
        let chars = content.chars().take(cap).collect();
        Self { chars, cap }
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.chars.len() >= self.cap
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Slice of the live character slots (no trailing padding).
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Owned copy of the content; what the host persists on submit.
    pub fn content(&self) -> String {
        self.chars.iter().collect()
    }

    /// Insert `ch` before slot `at`, shifting the tail right by one.
    /// Returns `false` without mutating when the buffer is full. `at` is
    /// clamped to `len()` so an end-of-line append is always well-formed.
    pub fn insert(&mut self, at: usize, ch: char) -> bool {
        if self.is_full() {
            return false;
        }
        let at = at.min(self.chars.len());
        self.chars.insert(at, ch);
        true
    }

    /// Remove the character in slot `at`, shifting the tail left by one.
    /// Out-of-range `at` is a no-op returning `None`.
    pub fn remove(&mut self, at: usize) -> Option<char> {
        if at >= self.chars.len() {
            return None;
        }
        Some(self.chars.remove(at))
    }

    /// Remove the inclusive slot range `[start, end]`, shifting everything
    /// above it down by the range size. Returns the number of characters
    /// removed. `end` is clamped to the last slot; an empty buffer or a
    /// start past the end removes nothing.
    pub fn remove_range(&mut self, start: usize, end: usize) -> usize {
        if self.chars.is_empty() || start >= self.chars.len() || end < start {
            return 0;
        }
        let end = end.min(self.chars.len() - 1);
        let removed = end - start + 1;
        self.chars.drain(start..=end);
        removed
    }

    /// Overwrite the character in slot `at` without shifting anything.
    /// Returns `false` when the slot is out of range.
    pub fn replace(&mut self, at: usize, ch: char) -> bool {
        match self.chars.get_mut(at) {
            Some(slot) => {
                *slot = ch;
                true
            }
            None => false,
        }
    }

    /// Drop everything from slot `at` to the end (vi `D`).
    pub fn truncate(&mut self, at: usize) {
        self.chars.truncate(at);
    }

    /// Apply `f` to every slot in the inclusive range `[start, end]` in
    /// place; length is unchanged. Out-of-range portions are ignored.
    pub fn map_range(&mut self, start: usize, end: usize, f: impl Fn(char) -> char) {
        if self.chars.is_empty() || start >= self.chars.len() {
            return;
        }
        let end = end.min(self.chars.len() - 1);
        for slot in &mut self.chars[start..=end] {
            *slot = f(*slot);
        }
    }
}
