//! Enter/exit transitions for tutorial content and the context menu.
//!
//! A `Transition` is a pure function of time: callers pass the current
//! `Instant` and read opacity, row offset or scale for that frame. Rendering
//! code applies those values; nothing here touches the terminal.
//!
//! # Example
//!
//! ```rust
//! use click_tutorial::ui::transition::Transition;
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let fade_in = Transition::enter_slide(start, Duration::from_millis(500), 3);
//! assert_eq!(fade_in.row_offset_at(start), 3);
//! assert!(fade_in.is_finished_at(start + Duration::from_millis(500)));
//! ```

use ratatui::{buffer::Buffer, layout::Rect, style::Color};
use std::time::{Duration, Instant};

/// Whether content is appearing or disappearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Enter,
    Exit,
}

/// Geometric part of a transition. Both kinds also fade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Vertical slide. Enter comes up from `rows` below; exit leaves `rows` upward.
    Slide { rows: u16 },
    /// Grow from `from` to full size. Only used for entering.
    Scale { from: f32 },
}

/// A time-based fade + motion transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    started: Instant,
    duration: Duration,
    phase: Phase,
    motion: Motion,
}

impl Transition {
    fn new(started: Instant, duration: Duration, phase: Phase, motion: Motion) -> Self {
        Self {
            started,
            duration,
            phase,
            motion,
        }
    }

    /// Fade in while sliding up from `rows` below the resting position.
    pub fn enter_slide(started: Instant, duration: Duration, rows: u16) -> Self {
        Self::new(started, duration, Phase::Enter, Motion::Slide { rows })
    }

    /// Fade out while sliding `rows` above the resting position.
    pub fn exit_slide(started: Instant, duration: Duration, rows: u16) -> Self {
        Self::new(started, duration, Phase::Exit, Motion::Slide { rows })
    }

    /// Fade in while growing from `from` to full size.
    pub fn enter_scale(started: Instant, duration: Duration, from: f32) -> Self {
        Self::new(
            started,
            duration,
            Phase::Enter,
            Motion::Scale {
                from: from.clamp(0.0, 1.0),
            },
        )
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Linear progress (0.0 to 1.0). A zero duration is always complete.
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        }
    }

    /// Eased progress (ease-in-out cubic).
    pub fn eased_at(&self, now: Instant) -> f32 {
        ease_in_out_cubic(self.progress_at(now))
    }

    pub fn is_finished_at(&self, now: Instant) -> bool {
        self.progress_at(now) >= 1.0
    }

    /// Opacity for this frame (0.0 transparent, 1.0 opaque).
    pub fn opacity_at(&self, now: Instant) -> f32 {
        let t = self.eased_at(now);
        match self.phase {
            Phase::Enter => t,
            Phase::Exit => 1.0 - t,
        }
    }

    /// Rows to shift the content down (positive) or up (negative) this frame.
    pub fn row_offset_at(&self, now: Instant) -> i32 {
        let Motion::Slide { rows } = self.motion else {
            return 0;
        };
        let t = self.eased_at(now);
        let rows = f32::from(rows);
        match self.phase {
            Phase::Enter => (rows * (1.0 - t)).round() as i32,
            Phase::Exit => -((rows * t).round() as i32),
        }
    }

    /// Scale factor for this frame (1.0 is full size).
    pub fn scale_at(&self, now: Instant) -> f32 {
        let Motion::Scale { from } = self.motion else {
            return 1.0;
        };
        from + (1.0 - from) * self.eased_at(now)
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Shift `area` vertically by `offset` rows and clip it to `bounds`.
///
/// Returns `None` when nothing of the area remains visible.
pub fn offset_rows(area: Rect, offset: i32, bounds: Rect) -> Option<Rect> {
    let y = i32::from(area.y) + offset;
    let top = y.max(i32::from(bounds.top()));
    let bottom = (y + i32::from(area.height)).min(i32::from(bounds.bottom()));
    if bottom <= top {
        return None;
    }
    Some(Rect::new(
        area.x,
        top as u16,
        area.width,
        (bottom - top) as u16,
    ))
}

/// Shrink `area` around its center by `scale`.
pub fn scale_rect(area: Rect, scale: f32) -> Rect {
    let scale = scale.clamp(0.0, 1.0);
    let width = ((f32::from(area.width) * scale).round() as u16).max(1);
    let height = ((f32::from(area.height) * scale).round() as u16).max(1);
    Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Blend every cell in `area` toward `background` by `opacity`.
///
/// Opacity 1.0 leaves the cells untouched. Only RGB colors are blended;
/// cells without an explicit color take `fallback_fg` / `background`.
pub fn fade_area(buf: &mut Buffer, area: Rect, background: Color, fallback_fg: Color, opacity: f32) {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity >= 1.0 {
        return;
    }
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let fg = if cell.fg == Color::Reset {
                    fallback_fg
                } else {
                    cell.fg
                };
                let bg = if cell.bg == Color::Reset {
                    background
                } else {
                    cell.bg
                };
                cell.set_fg(blend(fg, background, opacity));
                cell.set_bg(blend(bg, background, opacity));
            }
        }
    }
}

/// Linear blend of `color` over `background`.
fn blend(color: Color, background: Color, opacity: f32) -> Color {
    match (color, background) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => Color::Rgb(
            mix(r, br, opacity),
            mix(g, bg, opacity),
            mix(b, bb, opacity),
        ),
        // Indexed colors cannot be blended; hide them until mostly opaque
        _ if opacity < 0.5 => background,
        _ => color,
    }
}

fn mix(channel: u8, background: u8, opacity: f32) -> u8 {
    let value = f32::from(background) + (f32::from(channel) - f32::from(background)) * opacity;
    value.round().clamp(0.0, 255.0) as u8
}
