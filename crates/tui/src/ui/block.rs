//! Rendering of a single tutorial content block.
//!
//! Responsibilities:
//! - Lay out the block's text column, button and hint glyph, centered in the frame
//! - Draw them at the transition's row offset and opacity
//! - Report where the block's control ended up, for hit-testing
//!
//! Does NOT handle:
//! - Choosing which block is visible (see `ui::presenter`)
//! - The context menu overlay (see `ui::context_menu`)

use click_tutorial_config::Theme;
use click_tutorial_config::constants::CONTENT_MAX_WIDTH;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, BorderType, Paragraph},
};

use crate::tutorial::{Control, ContentBlock, content::MENU_HINT_GLYPH};
use crate::ui::theme::ThemeExt;
use crate::ui::transition::{fade_area, offset_rows};

/// Height of a bordered button.
pub const BUTTON_HEIGHT: u16 = 3;
/// Rows reserved above the right-click target for the bouncing glyph.
const HINT_ROWS: u16 = 2;
/// Blank rows between the text and the button.
const TEXT_BUTTON_GAP: u16 = 1;
/// Horizontal margin kept free on each side of the text column.
const SIDE_MARGIN: u16 = 2;

/// Resting geometry of a block, before any transition offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockLayout {
    pub lines: Vec<String>,
    /// Text column; one row per wrapped line.
    pub text: Rect,
    pub button: Option<Rect>,
    /// Column above the button's right edge where the hint glyph bounces.
    pub hint: Option<Rect>,
}

/// Compute where `block` sits when centered in `area`.
pub fn layout_block(block: ContentBlock, area: Rect) -> BlockLayout {
    let column = CONTENT_MAX_WIDTH
        .min(area.width.saturating_sub(SIDE_MARGIN * 2))
        .max(1)
        .min(area.width);
    let lines = wrap_text(block.text(), column);
    let text_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

    let hint_rows = if block == ContentBlock::RightClickIntro {
        HINT_ROWS
    } else {
        0
    };
    let total = match block.button_label() {
        Some(_) => text_height
            .saturating_add(TEXT_BUTTON_GAP)
            .saturating_add(hint_rows)
            .saturating_add(BUTTON_HEIGHT),
        None => text_height,
    };
    let top = area.y + area.height.saturating_sub(total) / 2;

    let text = Rect::new(
        area.x + (area.width - column) / 2,
        top,
        column,
        text_height,
    );

    let button = block.button_label().map(|label| {
        let width = (label.chars().count() as u16)
            .saturating_add(4)
            .min(area.width);
        Rect::new(
            area.x + (area.width - width) / 2,
            text.bottom()
                .saturating_add(TEXT_BUTTON_GAP)
                .saturating_add(hint_rows),
            width,
            BUTTON_HEIGHT,
        )
    });

    let hint = button.filter(|_| hint_rows > 0).map(|button| {
        Rect::new(
            button.right().saturating_sub(2),
            button.y.saturating_sub(hint_rows),
            1,
            hint_rows,
        )
    });

    BlockLayout {
        lines,
        text,
        button,
        hint,
    }
}

/// Per-frame inputs for drawing a block.
#[derive(Debug, Clone, Copy)]
pub struct BlockView<'a> {
    pub block: ContentBlock,
    pub theme: &'a Theme,
    pub button_hovered: bool,
    /// Rows the hint glyph is lifted above its resting row (0 or 1).
    pub hint_lift: u16,
    pub row_offset: i32,
    pub opacity: f32,
}

/// Draw the block and return its control's on-screen rectangle, if drawn whole.
pub fn render_block(f: &mut Frame, area: Rect, view: &BlockView<'_>) -> Option<(Control, Rect)> {
    let layout = layout_block(view.block, area);
    let theme = view.theme;
    let text_style = if view.block.is_success() {
        theme.success()
    } else {
        theme.text()
    };

    for (row, line) in (layout.text.y..).zip(&layout.lines) {
        let line_area = Rect::new(layout.text.x, row, layout.text.width, 1);
        if let Some(target) = offset_rows(line_area, view.row_offset, area) {
            f.render_widget(
                Paragraph::new(line.as_str())
                    .style(text_style)
                    .alignment(Alignment::Center),
                target,
            );
        }
    }

    if let Some(hint) = layout.hint {
        let lift = view.hint_lift.min(hint.height.saturating_sub(1));
        let glyph_row = hint.bottom().saturating_sub(1 + lift);
        let glyph_area = Rect::new(hint.x, glyph_row, 1, 1);
        if let Some(target) = offset_rows(glyph_area, view.row_offset, area) {
            f.render_widget(Paragraph::new(MENU_HINT_GLYPH).style(theme.hint()), target);
        }
    }

    let mut drawn = None;
    if let (Some(button), Some(label), Some(control)) = (
        layout.button,
        view.block.button_label(),
        view.block.control(),
    ) && let Some(target) =
        offset_rows(button, view.row_offset, area).filter(|r| r.height == button.height)
    {
        let style = theme.button(view.button_hovered);
        f.render_widget(
            Paragraph::new(label)
                .style(style)
                .alignment(Alignment::Center)
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .style(style),
                ),
            target,
        );
        drawn = Some((control, target));
    }

    fade_area(
        f.buffer_mut(),
        area,
        theme.background,
        theme.text,
        view.opacity,
    );

    drawn
}

/// Greedy word wrap on whitespace. Words longer than `width` are split.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}
