//! Configuration loading for the TUI.
//!
//! Responsibilities:
//! - Load configuration with file, environment variable and CLI layers.
//!
//! Does NOT handle:
//! - Parsing individual sources (see `click_tutorial_config::ConfigLoader`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > config file > defaults.
//! - `load_dotenv()` is called before any other source is read.
//! - A blank `--config-path` is treated as absent.

use std::time::Duration;

use anyhow::Result;
use click_tutorial_config::{ConfigLoader, TutorialConfig};

use crate::cli::Cli;

/// Resolve the tutorial configuration for this run.
pub fn load_config(cli: &Cli) -> Result<TutorialConfig> {
    let loader = ConfigLoader::new().load_dotenv()?;

    let loader = match &cli.config_path {
        Some(path) if !path.to_string_lossy().trim().is_empty() => {
            loader.with_config_path(path.clone())
        }
        _ => loader,
    };

    let mut loader = loader.from_file()?.from_env()?;

    if let Some(theme) = cli.theme {
        loader = loader.with_theme(theme);
    }
    if let Some(millis) = cli.auto_advance_ms {
        loader = loader.with_auto_advance(Duration::from_millis(millis));
    }
    if cli.reduce_motion {
        loader = loader.with_reduce_motion(true);
    }

    let config = loader.build()?;
    tracing::info!(
        theme = config.theme.key(),
        auto_advance_ms = config.auto_advance.as_millis() as u64,
        reduce_motion = config.reduce_motion,
        "Configuration loaded"
    );
    Ok(config)
}
