//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Fill the frame with the theme background
//! - Draw the mounted content block at its transition state
//! - Draw the context menu overlay while the menu is open
//! - Record control and menu row rectangles for hit-testing
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT change the tutorial stage

use std::time::Instant;

use click_tutorial_config::constants::HINT_BOUNCE_PERIOD_MS;
use ratatui::{Frame, widgets::Block};

use crate::app::{App, HoverTarget};
use crate::ui::block::{BlockView, render_block};
use crate::ui::context_menu::{MenuView, render_context_menu};
use crate::ui::theme::ThemeExt;

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        self.render_at(f, Instant::now());
    }

    /// Render the frame as it looks at `now`.
    pub fn render_at(&mut self, f: &mut Frame, now: Instant) {
        let area = f.area();
        self.last_area = area;
        self.presenter.tick(now);
        self.regions.clear();

        f.render_widget(Block::default().style(self.theme.base()), area);

        let block = self.presenter.mounted();
        let transition = self.presenter.transition();
        let view = BlockView {
            block,
            theme: &self.theme,
            button_hovered: block
                .control()
                .is_some_and(|control| self.hover == Some(HoverTarget::Control(control))),
            hint_lift: self.hint_lift(now),
            row_offset: transition.row_offset_at(now),
            opacity: transition.opacity_at(now),
        };
        if let Some((control, rect)) = render_block(f, area, &view) {
            self.regions.set(control, rect);
        }

        if self.tutorial.is_context_menu_open() {
            let (scale, opacity) = self
                .menu_transition
                .map_or((1.0, 1.0), |t| (t.scale_at(now), t.opacity_at(now)));
            let hovered_row = match self.hover {
                Some(HoverTarget::MenuRow(index)) => Some(index),
                _ => None,
            };
            self.regions.menu_rows = render_context_menu(
                f,
                area,
                self.tutorial.popup_position(),
                &MenuView {
                    theme: &self.theme,
                    hovered_row,
                    scale,
                    opacity,
                },
            );
        }
    }

    /// Rows the hint glyph is lifted this frame: up for the first half of
    /// each bounce period, down for the second.
    fn hint_lift(&self, now: Instant) -> u16 {
        if self.reduce_motion {
            return 0;
        }
        let elapsed = now.saturating_duration_since(self.presenter.mounted_at());
        let half_period = u128::from(HINT_BOUNCE_PERIOD_MS / 2).max(1);
        u16::from((elapsed.as_millis() / half_period) % 2 == 0)
    }
}
