//! Mouse event handling for the TUI app.
//!
//! Responsibilities:
//! - Turn button presses on the tutorial's controls into activations
//! - Track hover over controls and context menu rows
//!
//! Does NOT handle:
//! - Keyboard input
//! - Rendering; hit-testing uses the rectangles recorded by the last frame

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::action::Action;
use crate::app::{App, HoverTarget};
use crate::tutorial::{Control, MENU_ITEMS};

impl App {
    /// Handle mouse input - returns Action if one should be dispatched.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.regions.menu_row_at(mouse.column, mouse.row) {
                    tracing::debug!(item = MENU_ITEMS[index].label, "Menu row clicked");
                    return None;
                }
                match self.regions.control_at(mouse.column, mouse.row) {
                    Some(Control::CallToAction) => Some(Action::PrimaryActivation),
                    _ => None,
                }
            }
            MouseEventKind::Down(MouseButton::Right) => {
                match self.regions.control_at(mouse.column, mouse.row) {
                    Some(Control::ContextTarget) => Some(Action::SecondaryActivation),
                    _ => None,
                }
            }
            MouseEventKind::Moved => {
                self.hover = self.hover_target_at(mouse.column, mouse.row);
                None
            }
            _ => None,
        }
    }

    /// Menu rows are drawn over the content, so they win.
    fn hover_target_at(&self, column: u16, row: u16) -> Option<HoverTarget> {
        self.regions
            .menu_row_at(column, row)
            .map(HoverTarget::MenuRow)
            .or_else(|| {
                self.regions
                    .control_at(column, row)
                    .map(HoverTarget::Control)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use click_tutorial_config::TutorialConfig;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app_with_regions() -> App {
        let mut app = App::new(TutorialConfig::default());
        app.regions.call_to_action = Some(Rect::new(10, 10, 20, 3));
        app.regions.context_target = Some(Rect::new(10, 20, 40, 3));
        app.regions.menu_rows = vec![Rect::new(50, 20, 12, 1)];
        app
    }

    #[test]
    fn test_left_click_on_call_to_action() {
        let mut app = app_with_regions();
        let action = app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 15, 11));
        assert_eq!(action, Some(Action::PrimaryActivation));
    }

    #[test]
    fn test_left_click_outside_controls_is_ignored() {
        let mut app = app_with_regions();
        assert_eq!(
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0)),
            None
        );
        // left click on the right-click target does nothing
        assert_eq!(
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 15, 21)),
            None
        );
    }

    #[test]
    fn test_right_click_on_target() {
        let mut app = app_with_regions();
        let action = app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 49, 22));
        assert_eq!(action, Some(Action::SecondaryActivation));
    }

    #[test]
    fn test_right_click_on_call_to_action_is_ignored() {
        let mut app = app_with_regions();
        assert_eq!(
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 15, 11)),
            None
        );
    }

    #[test]
    fn test_menu_rows_do_nothing_when_clicked() {
        let mut app = app_with_regions();
        assert_eq!(
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 55, 20)),
            None
        );
    }

    #[test]
    fn test_hover_tracking() {
        let mut app = app_with_regions();

        app.handle_mouse(mouse(MouseEventKind::Moved, 12, 12));
        assert_eq!(app.hover(), Some(HoverTarget::Control(Control::CallToAction)));

        app.handle_mouse(mouse(MouseEventKind::Moved, 55, 20));
        assert_eq!(app.hover(), Some(HoverTarget::MenuRow(0)));

        app.handle_mouse(mouse(MouseEventKind::Moved, 0, 0));
        assert_eq!(app.hover(), None);
    }
}
