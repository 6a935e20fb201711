//! Test helpers for TUI testing.
//!
//! Provides a `TestBackend` harness around `App` plus utilities for
//! simulating keyboard and mouse input.

#![allow(dead_code)]

use std::time::Instant;

use click_tutorial::App;
use click_tutorial_config::TutorialConfig;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

/// Test harness rendering the app into an in-memory terminal.
pub struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TuiHarness {
    /// Create a harness with instant transitions.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_config(
            width,
            height,
            TutorialConfig {
                reduce_motion: true,
                ..TutorialConfig::default()
            },
        )
    }

    pub fn with_config(width: u16, height: u16, config: TutorialConfig) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        Self {
            app: App::new(config),
            terminal,
        }
    }

    /// Render the current app state and return the buffer contents.
    pub fn render(&mut self) -> String {
        self.terminal
            .draw(|f| self.app.render(f))
            .expect("Failed to render");
        buffer_to_string(self.terminal.backend().buffer())
    }

    /// Render the frame as it looks at `now`.
    pub fn render_at(&mut self, now: Instant) -> String {
        self.terminal
            .draw(|f| self.app.render_at(f, now))
            .expect("Failed to render");
        buffer_to_string(self.terminal.backend().buffer())
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Symbol drawn at a cell.
    pub fn symbol(&self, x: u16, y: u16) -> &str {
        self.buffer()[(x, y)].symbol()
    }

    pub fn fg(&self, x: u16, y: u16) -> Color {
        self.buffer()[(x, y)].fg
    }

    pub fn bg(&self, x: u16, y: u16) -> Color {
        self.buffer()[(x, y)].bg
    }
}

/// Convert a ratatui Buffer to a string, one line per row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            output.push(cell.symbol().chars().next().unwrap_or(' '));
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}

/// Index of the first row containing `needle`.
pub fn row_of(screen: &str, needle: &str) -> Option<usize> {
    screen.lines().position(|line| line.contains(needle))
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create a Shift+F10 key event.
pub fn shift_f10() -> KeyEvent {
    KeyEvent::new(KeyCode::F(10), KeyModifiers::SHIFT)
}

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

pub fn left_click(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

pub fn right_click(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Right), column, row)
}

pub fn mouse_move(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Moved, column, row)
}
