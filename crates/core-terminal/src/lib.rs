//! Terminal backend abstraction and crossterm implementation.
//!
//! Owns raw mode and the alternate screen, plus the mode-dependent cursor
//! shape (bar while inserting, underline while replacing, block otherwise).
//! The engine never touches any of this; the host drives it around dispatch
//! calls.

use anyhow::Result;
use core_state::Mode;
use crossterm::{
    cursor::SetCursorStyle,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::stdout;

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
    fn set_cursor_shape(&mut self, mode: Mode) -> Result<()>;
}

pub struct CrosstermBackend {
    entered: bool,
}

/// RAII guard ensuring terminal state restoration even if the caller
/// early-returns or panics.
pub struct TerminalGuard<'a> {
    backend: &'a mut CrosstermBackend,
    active: bool,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }

    /// Enter and return a guard that will leave on drop.
    pub fn enter_guard(&mut self) -> Result<TerminalGuard<'_>> {
        self.enter()?;
        Ok(TerminalGuard {
            backend: self,
            active: true,
        })
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !self.entered {
            enable_raw_mode()?;
            execute!(stdout(), EnterAlternateScreen)?;
            self.entered = true;
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.entered {
            execute!(stdout(), SetCursorStyle::DefaultUserShape, LeaveAlternateScreen)?;
            disable_raw_mode()?;
            self.entered = false;
        }
        Ok(())
    }

    fn set_cursor_shape(&mut self, mode: Mode) -> Result<()> {
        let style = match mode {
            Mode::Insert => SetCursorStyle::SteadyBar,
            Mode::Replace => SetCursorStyle::SteadyUnderScore,
            Mode::Normal | Mode::Visual => SetCursorStyle::SteadyBlock,
        };
        execute!(stdout(), style)?;
        Ok(())
    }
}

impl<'a> TerminalGuard<'a> {
    /// Access the backend for mid-session operations (cursor shape).
    pub fn backend_mut(&mut self) -> &mut CrosstermBackend {
        self.backend
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

impl<'a> Drop for TerminalGuard<'a> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.backend.leave();
        }
    }
}
