//! Action protocol for async TUI event handling.
//!
//! Actions flow through a bounded channel from the input reader and the
//! deferred-transition task to the main loop, where `App::update` applies
//! them. Raw terminal events are translated into tutorial triggers by the
//! app's input and mouse handlers.

use crossterm::event::{KeyEvent, MouseEvent, MouseEventKind};

/// Unified action type for async TUI event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // System
    /// Quit the application
    Quit,
    /// Periodic frame tick
    Tick,
    /// Terminal resized (width, height)
    Resize(u16, u16),

    // Input
    /// Raw keyboard input event
    Input(KeyEvent),
    /// Raw mouse input event
    Mouse(MouseEvent),

    // Tutorial triggers
    /// Primary activation of the call-to-action
    PrimaryActivation,
    /// Secondary (contextual) activation of the right-click target
    SecondaryActivation,
    /// The deferred timer scheduled after the first click fired
    DeferredAdvance,
}

impl Action {
    /// High-frequency actions that are logged at `trace` instead of `debug`.
    pub fn is_noisy(&self) -> bool {
        match self {
            Self::Tick => true,
            Self::Mouse(mouse) => matches!(
                mouse.kind,
                MouseEventKind::Moved | MouseEventKind::Drag(_)
            ),
            _ => false,
        }
    }
}
