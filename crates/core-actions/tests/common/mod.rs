#![allow(dead_code)] // Shared across integration test binaries; each uses a subset.

use core_actions::{DispatchResult, dispatch, translate_key};
use core_events::KeyEvent;
use core_model::InputModel;

pub const CAP: usize = 20;
pub const HIST: usize = 8;
pub const WIDTH: usize = 10;

pub fn model_with(content: &str) -> InputModel {
    InputModel::seeded(CAP, HIST, WIDTH, content)
}

/// Run one key through translation + dispatch. Untranslatable keys come
/// back clean, mirroring the host loop dropping them.
pub fn press(model: &mut InputModel, key: KeyEvent) -> DispatchResult {
    match translate_key(model.state.mode, &key) {
        Some(action) => dispatch(action, model),
        None => DispatchResult::clean(),
    }
}

/// Feed a run of printable keys one at a time.
pub fn type_keys(model: &mut InputModel, keys: &str) {
    for c in keys.chars() {
        press(model, KeyEvent::ch(c));
    }
}
