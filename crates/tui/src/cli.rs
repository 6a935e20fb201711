//! Command-line argument parsing for click-tutorial.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `click_tutorial_config::ConfigLoader`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use click_tutorial_config::ColorTheme;
use std::path::PathBuf;

/// Command-line arguments for click-tutorial.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --theme, --auto-advance-ms)
/// 2. Environment variables (e.g., CLICK_TUTORIAL_THEME)
/// 3. Configuration file (config.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "click-tutorial",
    about = "Interactive terminal tutorial for clicking and right-clicking",
    version,
    after_help = "Examples:\n  click-tutorial\n  click-tutorial --theme high-contrast\n  click-tutorial --auto-advance-ms 5000 --reduce-motion\n  click-tutorial --config-path ./tutorial.json --log-dir /tmp/click-tutorial\n"
)]
pub struct Cli {
    /// Path to a custom configuration file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Color theme (default, light, high_contrast, monochrome)
    #[arg(long)]
    pub theme: Option<ColorTheme>,

    /// Milliseconds before the click success message advances (1-60000)
    #[arg(long)]
    pub auto_advance_ms: Option<u64>,

    /// Finish transitions instantly and keep hint glyphs still
    #[arg(long)]
    pub reduce_motion: bool,
}
