//! Theme types for the click tutorial.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` with all color values.
//! - Provide conversion from `ColorTheme` to `Theme`.
//!
//! Does NOT handle:
//! - Actual rendering (see the TUI crate).
//!
//! Invariants:
//! - `ColorTheme` is the configured representation; `Theme` is the runtime representation.
//! - `Theme` is intentionally NOT serializable - always configure `ColorTheme`.
//! - All colors are RGB so transitions can blend them toward the background.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    HighContrast,
    Monochrome,
}

impl ColorTheme {
    /// All themes, in display order.
    pub const ALL: [ColorTheme; 4] = [
        Self::Default,
        Self::Light,
        Self::HighContrast,
        Self::Monochrome,
    ];

    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
        }
    }

    /// Identifier used in config files, env vars and CLI flags.
    pub fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Light => "light",
            Self::HighContrast => "high_contrast",
            Self::Monochrome => "monochrome",
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ColorTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|theme| theme.key() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown theme '{}' (expected one of: default, light, high_contrast, monochrome)",
                    s.trim()
                )
            })
    }
}

/// Expanded runtime theme.
///
/// Invariants:
/// - This is intentionally **not serialized**. Configure `ColorTheme` and expand on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub success: Color,
    pub accent: Color,

    // Buttons
    pub button_fg: Color,
    pub button_bg: Color,
    pub button_hover_bg: Color,

    // Context menu
    pub menu_fg: Color,
    pub menu_bg: Color,
    pub menu_hover_bg: Color,
    pub menu_border: Color,
}

impl Theme {
    /// Expand a configured theme into concrete colors.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                background: Color::Rgb(0, 0, 0),
                text: Color::Rgb(255, 255, 255),
                success: Color::Rgb(74, 222, 128),
                accent: Color::Rgb(255, 255, 255),
                button_fg: Color::Rgb(0, 0, 0),
                button_bg: Color::Rgb(255, 255, 255),
                button_hover_bg: Color::Rgb(229, 231, 235),
                menu_fg: Color::Rgb(0, 0, 0),
                menu_bg: Color::Rgb(255, 255, 255),
                menu_hover_bg: Color::Rgb(229, 231, 235),
                menu_border: Color::Rgb(156, 163, 175),
            },
            ColorTheme::Light => Self {
                background: Color::Rgb(250, 250, 250),
                text: Color::Rgb(17, 24, 39),
                success: Color::Rgb(22, 163, 74),
                accent: Color::Rgb(37, 99, 235),
                button_fg: Color::Rgb(255, 255, 255),
                button_bg: Color::Rgb(17, 24, 39),
                button_hover_bg: Color::Rgb(55, 65, 81),
                menu_fg: Color::Rgb(17, 24, 39),
                menu_bg: Color::Rgb(229, 231, 235),
                menu_hover_bg: Color::Rgb(209, 213, 219),
                menu_border: Color::Rgb(107, 114, 128),
            },
            ColorTheme::HighContrast => Self {
                background: Color::Rgb(0, 0, 0),
                text: Color::Rgb(255, 255, 255),
                success: Color::Rgb(0, 255, 0),
                accent: Color::Rgb(255, 255, 0),
                button_fg: Color::Rgb(0, 0, 0),
                button_bg: Color::Rgb(255, 255, 0),
                button_hover_bg: Color::Rgb(0, 255, 255),
                menu_fg: Color::Rgb(0, 0, 0),
                menu_bg: Color::Rgb(255, 255, 255),
                menu_hover_bg: Color::Rgb(255, 255, 0),
                menu_border: Color::Rgb(255, 255, 255),
            },
            ColorTheme::Monochrome => Self {
                background: Color::Rgb(0, 0, 0),
                text: Color::Rgb(200, 200, 200),
                success: Color::Rgb(255, 255, 255),
                accent: Color::Rgb(255, 255, 255),
                button_fg: Color::Rgb(0, 0, 0),
                button_bg: Color::Rgb(200, 200, 200),
                button_hover_bg: Color::Rgb(255, 255, 255),
                menu_fg: Color::Rgb(0, 0, 0),
                menu_bg: Color::Rgb(200, 200, 200),
                menu_hover_bg: Color::Rgb(255, 255, 255),
                menu_border: Color::Rgb(128, 128, 128),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::Default)
    }
}
