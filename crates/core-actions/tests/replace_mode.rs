mod common;

use common::{model_with, press, type_keys};
use core_events::{KeyCode, KeyEvent};
use core_state::Mode;

#[test]
fn replace_overwrites_cell_and_returns_to_normal() {
    let mut m = model_with("abc");
    type_keys(&mut m, "lrX");
    assert_eq!(m.state.buffer().content(), "aXc");
    assert_eq!(m.state.mode, Mode::Normal);
    assert_eq!(m.view.cursor, 1, "cursor stays on the overwritten cell");
    assert_eq!(m.state.history().len(), 2, "replace commits");
    assert_eq!(m.state.buffer().len(), 3, "no shift, length unchanged");
}

#[test]
fn escape_cancels_replace_without_edit() {
    let mut m = model_with("abc");
    type_keys(&mut m, "r");
    assert_eq!(m.state.mode, Mode::Replace);
    press(&mut m, KeyEvent::plain(KeyCode::Esc));
    assert_eq!(m.state.mode, Mode::Normal);
    assert_eq!(m.state.buffer().content(), "abc");
    assert_eq!(m.state.history().len(), 1, "cancel never commits");
}

#[test]
fn replace_on_empty_buffer_just_drops_back_to_normal() {
    let mut m = model_with("");
    type_keys(&mut m, "rZ");
    assert_eq!(m.state.buffer().content(), "");
    assert_eq!(m.state.mode, Mode::Normal);
    assert_eq!(m.state.history().len(), 1);
}

#[test]
fn motion_keys_are_inert_in_replace_mode() {
    let mut m = model_with("abc");
    type_keys(&mut m, "r");
    let res = press(&mut m, KeyEvent::plain(KeyCode::Left));
    assert!(!res.dirty);
    assert_eq!(m.state.mode, Mode::Replace);
    type_keys(&mut m, "l");
    // 'l' is a printable in Replace mode, not a motion
    assert_eq!(m.state.buffer().content(), "lbc");
    assert_eq!(m.state.mode, Mode::Normal);
}

#[test]
fn replace_then_undo_restores_original() {
    let mut m = model_with("abc");
    type_keys(&mut m, "rQ");
    assert_eq!(m.state.buffer().content(), "Qbc");
    type_keys(&mut m, "u");
    assert_eq!(m.state.buffer().content(), "abc");
}
