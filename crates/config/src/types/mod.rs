//! Configuration type definitions for the click tutorial.
//!
//! Responsibilities:
//! - Define the theme and tutorial configuration types.
//! - Ensure consistent defaults and type safety across the configuration system.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Rendering (see the TUI crate).
//!
//! Invariants:
//! - `ColorTheme` is the configured representation; `Theme` is the runtime representation.

mod theme;
mod tutorial;

pub use theme::{ColorTheme, Theme};
pub use tutorial::TutorialConfig;
