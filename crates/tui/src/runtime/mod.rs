//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - Configuration loading
//! - File logging
//! - The deferred stage transition task
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `click_tutorial::app` and `click_tutorial::ui`).
//! - Tutorial rules (see `click_tutorial::tutorial`).
//!
//! Invariants:
//! - Tasks spawned here only send actions; they never touch app state.

pub mod config;
pub mod deferred;
pub mod logging;
pub mod terminal;
