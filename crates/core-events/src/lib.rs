//! Normalized key events consumed by the translation layer.
//!
//! The host decodes whatever its input device produces (crossterm events,
//! test fixtures) into this small model before anything engine-side sees it.
//! Unrecognized device events simply never become a `KeyEvent`.

use std::fmt;

/// Logical key identity after device decoding.
///
/// Printable input always arrives as `Char`; control keys the widget reacts
/// to get named variants. Anything else is dropped at the decode boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Left,
    Right,
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const CTRL = 0b0000_0001;
        const ALT  = 0b0000_0010;
        const SHIFT= 0b0000_0100;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyEvent {
    /// Plain (unmodified) key.
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::empty(),
        }
    }

    /// Printable character without modifiers. Shifted letters arrive already
    /// uppercased by the device layer, so SHIFT is intentionally not set here.
    pub fn ch(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    /// Character with CTRL held (e.g. Ctrl-R for redo).
    pub fn ctrl(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            mods: KeyModifiers::CTRL,
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:?}", self.code, self.mods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_constructor_has_no_mods() {
        let k = KeyEvent::ch('x');
        assert_eq!(k.code, KeyCode::Char('x'));
        assert!(k.mods.is_empty());
    }

    #[test]
    fn ctrl_constructor_sets_ctrl_only() {
        let k = KeyEvent::ctrl('r');
        assert_eq!(k.code, KeyCode::Char('r'));
        assert_eq!(k.mods, KeyModifiers::CTRL);
    }

    #[test]
    fn key_event_display() {
        let k = KeyEvent::ctrl('r');
        let s = format!("{}", k);
        assert!(s.contains("Char"));
    }
}
