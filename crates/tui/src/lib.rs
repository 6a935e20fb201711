//! Click Tutorial Library
//!
//! This library provides the tutorial state machine, app state, rendering
//! and runtime helpers for the click / right-click terminal tutorial.
//!
//! # Example
//!
//! ```rust
//! use click_tutorial::{Action, App, tutorial::InteractionStage};
//! use click_tutorial_config::TutorialConfig;
//!
//! let mut app = App::new(TutorialConfig::default());
//! app.update(Action::PrimaryActivation);
//! assert_eq!(app.tutorial().stage(), InteractionStage::Clicked);
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod runtime;
pub mod tutorial;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, ControlRegions, HoverTarget};
pub use tutorial::{InteractionStage, PopupPosition, TutorialState};
