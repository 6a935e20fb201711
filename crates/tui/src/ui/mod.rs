//! UI rendering modules for the tutorial.
//!
//! This module contains the drawing logic that is separated from the app
//! state: content blocks, the context menu overlay, transitions and theme
//! helpers.

pub mod block;
pub mod context_menu;
pub mod presenter;
pub mod theme;
pub mod transition;

pub use presenter::ContentPresenter;
pub use theme::ThemeExt;
