//! The custom context menu overlay.
//!
//! The menu's top-left corner is anchored at the captured popup position.
//! When the menu would not fit, it is shifted inward for drawing only; the
//! captured position is left as it was.

use click_tutorial_config::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
};

use crate::tutorial::{MENU_ITEMS, PopupPosition};
use crate::ui::theme::ThemeExt;
use crate::ui::transition::{fade_area, scale_rect};

/// Full-size menu dimensions (width, height), borders included.
pub fn menu_size() -> (u16, u16) {
    let widest = MENU_ITEMS
        .iter()
        .map(|item| item.glyph.chars().count() + 1 + item.label.chars().count())
        .max()
        .unwrap_or(0);
    // one column of padding on each side plus the borders
    let width = u16::try_from(widest).unwrap_or(u16::MAX).saturating_add(4);
    let height = (MENU_ITEMS.len() as u16).saturating_add(2);
    (width, height)
}

/// Where the full-size menu is drawn for `position` inside `area`.
pub fn menu_rect(position: PopupPosition, area: Rect) -> Rect {
    let (width, height) = menu_size();
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = position
        .x
        .min(area.right().saturating_sub(width))
        .max(area.x);
    let y = position
        .y
        .min(area.bottom().saturating_sub(height))
        .max(area.y);
    Rect::new(x, y, width, height)
}

/// Per-frame inputs for drawing the menu.
#[derive(Debug, Clone, Copy)]
pub struct MenuView<'a> {
    pub theme: &'a Theme,
    pub hovered_row: Option<usize>,
    pub scale: f32,
    pub opacity: f32,
}

/// Draw the menu and return the rectangle of each visible row, in menu order.
pub fn render_context_menu(
    f: &mut Frame,
    area: Rect,
    position: PopupPosition,
    view: &MenuView<'_>,
) -> Vec<Rect> {
    let theme = view.theme;
    let rect = scale_rect(menu_rect(position, area), view.scale);

    let frame = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.menu_border())
        .style(theme.menu());
    let inner = frame.inner(rect);
    f.render_widget(Clear, rect);
    f.render_widget(frame, rect);

    let mut rows = Vec::with_capacity(MENU_ITEMS.len());
    for ((index, item), y) in MENU_ITEMS.iter().enumerate().zip(inner.top()..inner.bottom()) {
        let row = Rect::new(inner.x, y, inner.width, 1);
        let line = Line::from(vec![
            Span::raw(" "),
            Span::raw(item.glyph),
            Span::raw(" "),
            Span::raw(item.label),
        ]);
        f.render_widget(
            Paragraph::new(line).style(theme.menu_row(view.hovered_row == Some(index))),
            row,
        );
        rows.push(row);
    }

    fade_area(
        f.buffer_mut(),
        rect,
        theme.background,
        theme.menu_fg,
        view.opacity,
    );

    rows
}
