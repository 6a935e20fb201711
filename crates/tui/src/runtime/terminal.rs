//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Put the terminal into raw mode with the alternate screen and mouse capture.
//! - Ensure terminal state is restored on application exit, even during panics.
//!
//! Does NOT handle:
//! - Drawing (see `App::render`).
//!
//! Invariants / Assumptions:
//! - Mouse capture is always enabled. Right clicks must reach the tutorial
//!   instead of opening the terminal emulator's own context menu.
//! - Drop implementation must not panic.

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Guard that ensures terminal state is restored on drop.
///
/// # Invariants
/// - Must live for the duration of the TUI session
/// - Drop implementation must not panic
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enter raw mode, the alternate screen and mouse capture.
    ///
    /// If any step fails, whatever was already enabled is undone before the
    /// error is returned.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        tracing::debug!("Terminal entered raw mode with mouse capture");
        Ok(guard)
    }

    /// Restore the terminal, reporting errors. Drop repeats this silently.
    pub fn restore(&self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Restore terminal state, ignoring errors since we're in drop
        // and must not panic. The explicit restore in main() runs first
        // on normal exit; this covers panics and early returns.
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}
