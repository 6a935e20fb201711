//! Keyboard bindings for the tutorial.
//!
//! Enter and Space stand in for a primary click, Shift+F10 and the Menu key
//! for a secondary click. `q`, Esc and Ctrl+C quit.
//!
//! Like a mouse press, a key activation only counts while its control was
//! drawn in the last frame.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::App;
use crate::tutorial::{Control, ControlBounds};

impl App {
    /// Handle keyboard input - returns Action if one should be dispatched.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'))
        {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate_drawn(Control::CallToAction, Action::PrimaryActivation)
            }
            KeyCode::F(10) if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.activate_drawn(Control::ContextTarget, Action::SecondaryActivation)
            }
            KeyCode::Menu => {
                self.activate_drawn(Control::ContextTarget, Action::SecondaryActivation)
            }
            _ => None,
        }
    }

    fn activate_drawn(&self, control: Control, action: Action) -> Option<Action> {
        if self.regions.bounds_of(control).is_none() {
            tracing::debug!(?control, "Ignoring key activation, control not on screen");
            return None;
        }
        Some(action)
    }
}
