//! vinput entrypoint: a vi-style single-line input field.
//!
//! The binary owns everything the engine treats as external: raw-mode
//! terminal setup, key decoding, frame drawing, configuration, and
//! persistence of the submitted line. The loop is synchronous and
//! turn-based, one key processed to completion per iteration.

use anyhow::Result;
use clap::Parser;
use core_actions::{dispatch, translate_key};
use core_config::Config;
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_model::InputModel;
use core_render::draw_frame;
use core_state::InputState;
use core_terminal::{CrosstermBackend, TerminalBackend};
use core_text::LineBuffer;
use crossterm::{
    event::{self, Event, KeyCode as CtKeyCode, KeyEventKind, KeyModifiers as CtMods},
    execute,
    terminal::{Clear, ClearType},
};
use std::path::PathBuf;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod io;
use crate::io::OutputTarget;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "vinput", version, about = "vi-style single-line input field")]
struct Args {
    /// Output file for the submitted line; stdout when omitted.
    pub output: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `vinput.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Initial buffer content.
    #[arg(long)]
    pub seed: Option<String>,
    /// Placeholder shown while the buffer is empty (overrides config).
    #[arg(long)]
    pub placeholder: Option<String>,
}

struct SessionOutcome {
    submitted: bool,
}

/// File logging: the screen belongs to the widget, so diagnostics go to
/// `vinput.log`. Filter via the `VINPUT_LOG` env var, default `info`.
fn init_logging() -> WorkerGuard {
    let appender = tracing_appender::rolling::never(".", "vinput.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_env("VINPUT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}

/// Map a crossterm key event onto the engine's key model. Release events
/// and keys the widget has no use for decode to `None` and are dropped.
fn decode_key(raw: &event::KeyEvent) -> Option<KeyEvent> {
    if raw.kind == KeyEventKind::Release {
        return None;
    }
    let code = match raw.code {
        CtKeyCode::Char(c) => KeyCode::Char(c),
        CtKeyCode::Enter => KeyCode::Enter,
        CtKeyCode::Esc => KeyCode::Esc,
        CtKeyCode::Backspace => KeyCode::Backspace,
        CtKeyCode::Left => KeyCode::Left,
        CtKeyCode::Right => KeyCode::Right,
        _ => return None,
    };
    let mut mods = KeyModifiers::empty();
    if raw.modifiers.contains(CtMods::CONTROL) {
        mods |= KeyModifiers::CTRL;
    }
    if raw.modifiers.contains(CtMods::ALT) {
        mods |= KeyModifiers::ALT;
    }
    // SHIFT is dropped: printable chars arrive already shifted.
    Some(KeyEvent { code, mods })
}

fn run_session(
    model: &mut InputModel,
    cfg: &mut Config,
    backend: &mut CrosstermBackend,
) -> Result<SessionOutcome> {
    let mut out = std::io::stdout();
    execute!(out, Clear(ClearType::All))?;
    backend.set_cursor_shape(model.state.mode)?;
    draw_frame(&mut out, model, None)?;
    loop {
        match event::read()? {
            Event::Key(raw) => {
                let Some(key) = decode_key(&raw) else { continue };
                let Some(action) = translate_key(model.state.mode, &key) else {
                    // Unmapped key: nothing dispatched, but the status
                    // block still shows what was pressed.
                    draw_frame(&mut out, model, Some(&key))?;
                    continue;
                };
                let res = dispatch(action, model);
                if res.finished() {
                    return Ok(SessionOutcome {
                        submitted: res.submit,
                    });
                }
                backend.set_cursor_shape(model.state.mode)?;
                draw_frame(&mut out, model, Some(&key))?;
            }
            Event::Resize(cols, _rows) => {
                if let Some(limits) = cfg.recompute_after_resize(cols) {
                    model.view.width = limits.width;
                    model.scroll();
                    info!(target: "runtime", cols, width = limits.width, "resized");
                }
                execute!(out, Clear(ClearType::All))?;
                draw_frame(&mut out, model, None)?;
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = init_logging();

    let mut cfg = core_config::load_from(args.config.clone())?;
    let (cols, _rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let limits = cfg.apply_context(cols);
    info!(
        target: "runtime",
        width = limits.width,
        capacity = limits.capacity,
        history_depth = limits.history_depth,
        "starting session"
    );

    let placeholder = args
        .placeholder
        .clone()
        .or_else(|| cfg.file.field.placeholder.clone());
    let buffer = LineBuffer::from_str(limits.capacity, args.seed.as_deref().unwrap_or(""));
    let state = InputState::new(buffer, limits.history_depth).with_placeholder(placeholder);
    let mut model = InputModel::new(state, limits.width);

    let mut backend = CrosstermBackend::new();
    let outcome = {
        let mut guard = backend.enter_guard()?;
        run_session(&mut model, &mut cfg, guard.backend_mut())?
        // guard drops here: raw mode, screen, and cursor shape restored
        // before anything is printed to the real screen
    };

    if outcome.submitted {
        let target = match &args.output {
            Some(path) => OutputTarget::File(path.clone()),
            None => OutputTarget::Stdout,
        };
        // Persistence failure is fatal; the engine has no retry policy.
        io::persist(&target, &model.state.buffer().content())?;
    }
    info!(target: "runtime", submitted = outcome.submitted, "session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_maps_control_chord() {
        let raw = event::KeyEvent::new(CtKeyCode::Char('r'), CtMods::CONTROL);
        let key = decode_key(&raw).unwrap();
        assert_eq!(key.code, KeyCode::Char('r'));
        assert!(key.mods.contains(KeyModifiers::CTRL));
    }

    #[test]
    fn decode_drops_shift_on_printables() {
        let raw = event::KeyEvent::new(CtKeyCode::Char('A'), CtMods::SHIFT);
        let key = decode_key(&raw).unwrap();
        assert_eq!(key.code, KeyCode::Char('A'));
        assert!(key.mods.is_empty());
    }

    #[test]
    fn decode_ignores_unused_keys() {
        let raw = event::KeyEvent::new(CtKeyCode::F(5), CtMods::NONE);
        assert!(decode_key(&raw).is_none());
        let raw = event::KeyEvent::new(CtKeyCode::Up, CtMods::NONE);
        assert!(decode_key(&raw).is_none());
    }

    #[test]
    fn args_parse_output_and_overrides() {
        let args =
            Args::try_parse_from(["vinput", "out.txt", "--seed", "abc", "--placeholder", "hi"])
                .unwrap();
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert_eq!(args.seed.as_deref(), Some("abc"));
        assert_eq!(args.placeholder.as_deref(), Some("hi"));
    }
}
