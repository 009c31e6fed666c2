mod common;

use common::{model_with, press, type_keys};
use core_events::{KeyCode, KeyEvent};
use core_state::Mode;

#[test]
fn horizontal_motions_clamp_at_both_ends() {
    let mut m = model_with("abc");
    let res = press(&mut m, KeyEvent::ch('h'));
    assert!(!res.dirty, "left at start is a no-op");
    type_keys(&mut m, "lll");
    assert_eq!(m.view.cursor, 2, "right clamps to the last slot");
    press(&mut m, KeyEvent::plain(KeyCode::Left));
    assert_eq!(m.view.cursor, 1);
}

#[test]
fn line_jumps() {
    let mut m = model_with("hello world");
    type_keys(&mut m, "$");
    assert_eq!(m.view.cursor, 10);
    type_keys(&mut m, "0");
    assert_eq!(m.view.cursor, 0);
    type_keys(&mut m, "$^");
    assert_eq!(m.view.cursor, 0);
}

#[test]
fn dollar_on_empty_buffer_stays_at_zero() {
    let mut m = model_with("");
    type_keys(&mut m, "$");
    assert_eq!(m.view.cursor, 0);
}

#[test]
fn word_motions_walk_mixed_content() {
    let mut m = model_with("abc  =def==( )");
    type_keys(&mut m, "w");
    assert_eq!(m.view.cursor, 5);
    type_keys(&mut m, "w");
    assert_eq!(m.view.cursor, 6);
    type_keys(&mut m, "0W");
    assert_eq!(m.view.cursor, 5);
    type_keys(&mut m, "W");
    assert_eq!(m.view.cursor, 13);
    type_keys(&mut m, "b");
    assert_eq!(m.view.cursor, 9, "b lands on the start of the ==( run");
    type_keys(&mut m, "B");
    assert_eq!(m.view.cursor, 5);
    type_keys(&mut m, "0e");
    assert_eq!(m.view.cursor, 2);
}

#[test]
fn x_deletes_under_cursor_and_clamps() {
    let mut m = model_with("abc");
    type_keys(&mut m, "$x");
    assert_eq!(m.state.buffer().content(), "ab");
    assert_eq!(m.view.cursor, 1, "cursor clamped onto the new last slot");
    assert_eq!(m.state.history().len(), 2, "x commits");
}

#[test]
fn x_on_empty_buffer_is_silent() {
    let mut m = model_with("");
    let res = press(&mut m, KeyEvent::ch('x'));
    assert!(!res.dirty);
    assert_eq!(m.state.history().len(), 1);
}

#[test]
fn capital_d_truncates_at_cursor() {
    let mut m = model_with("abcdef");
    type_keys(&mut m, "llD");
    assert_eq!(m.state.buffer().content(), "ab");
    assert_eq!(m.view.cursor, 1);
    assert_eq!(m.state.history().len(), 2, "D commits");
}

#[test]
fn motions_never_commit() {
    let mut m = model_with("one two three");
    type_keys(&mut m, "wwb$0eh");
    assert_eq!(m.state.history().len(), 1);
    assert_eq!(m.state.mode, Mode::Normal);
}

#[test]
fn q_quits_without_submit() {
    let mut m = model_with("abc");
    let res = press(&mut m, KeyEvent::ch('q'));
    assert!(res.quit);
    assert!(!res.submit);
    assert!(res.finished());
}

#[test]
fn return_submits() {
    let mut m = model_with("abc");
    let res = press(&mut m, KeyEvent::plain(KeyCode::Enter));
    assert!(res.quit);
    assert!(res.submit);
}

#[test]
fn cursor_scrolls_viewport_at_line_end() {
    let mut m = model_with("abcdefghijklmnop"); // 16 chars, width 10
    type_keys(&mut m, "$");
    assert!(m.view.offset > 0, "end of a long line forces a scroll");
    assert!(m.view.offset <= m.view.cursor);
    assert!(m.view.cursor < m.view.offset + m.view.width);
    type_keys(&mut m, "0");
    assert_eq!(m.view.offset, 0);
}
