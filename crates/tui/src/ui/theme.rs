//! TUI-specific theme helpers and style builders.
//!
//! This module extends `click_tutorial_config::Theme` with ergonomic helpers
//! for building ratatui `Style` objects consistently across the tutorial.

use click_tutorial_config::Theme;
use ratatui::style::{Modifier, Style};

/// Trait extending Theme with helper methods for creating styled widgets.
pub trait ThemeExt {
    /// Screen background.
    fn base(&self) -> Style;
    /// Explanation paragraphs.
    fn text(&self) -> Style;
    /// Success messages (bold).
    fn success(&self) -> Style;
    /// Call-to-action and right-click buttons.
    fn button(&self, hovered: bool) -> Style;
    /// Context menu body.
    fn menu(&self) -> Style;
    fn menu_row(&self, hovered: bool) -> Style;
    fn menu_border(&self) -> Style;
    /// The bouncing hint glyph.
    fn hint(&self) -> Style;
}

impl ThemeExt for Theme {
    fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    fn text(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    fn success(&self) -> Style {
        Style::default()
            .fg(self.success)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    fn button(&self, hovered: bool) -> Style {
        let bg = if hovered {
            self.button_hover_bg
        } else {
            self.button_bg
        };
        Style::default()
            .fg(self.button_fg)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    fn menu(&self) -> Style {
        Style::default().fg(self.menu_fg).bg(self.menu_bg)
    }

    fn menu_row(&self, hovered: bool) -> Style {
        if hovered {
            Style::default().fg(self.menu_fg).bg(self.menu_hover_bg)
        } else {
            self.menu()
        }
    }

    fn menu_border(&self) -> Style {
        Style::default().fg(self.menu_border).bg(self.menu_bg)
    }

    fn hint(&self) -> Style {
        Style::default().fg(self.accent).bg(self.background)
    }
}
