//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `CLICK_TUTORIAL_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Loading from config files (see file.rs).
//! - Building the final TutorialConfig (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Unparseable values return ConfigError::InvalidValue naming the variable.

use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::ColorTheme;

pub const ENV_THEME: &str = "CLICK_TUTORIAL_THEME";
pub const ENV_AUTO_ADVANCE_MS: &str = "CLICK_TUTORIAL_AUTO_ADVANCE_MS";
pub const ENV_REDUCE_MOTION: &str = "CLICK_TUTORIAL_REDUCE_MOTION";
pub const ENV_CONFIG_PATH: &str = "CLICK_TUTORIAL_CONFIG_PATH";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// Environment variables take precedence over config file settings.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(theme) = env_var_or_none(ENV_THEME) {
        let theme: ColorTheme = theme.parse().map_err(|message| ConfigError::InvalidValue {
            var: ENV_THEME.to_string(),
            message,
        })?;
        loader.set_theme(Some(theme));
    }
    if let Some(delay) = env_var_or_none(ENV_AUTO_ADVANCE_MS) {
        let millis: u64 = delay.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_AUTO_ADVANCE_MS.to_string(),
            message: "must be a number of milliseconds".to_string(),
        })?;
        loader.set_auto_advance(Some(Duration::from_millis(millis)));
    }
    if let Some(reduce) = env_var_or_none(ENV_REDUCE_MOTION) {
        loader.set_reduce_motion(Some(reduce.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: ENV_REDUCE_MOTION.to_string(),
                message: "must be true or false".to_string(),
            }
        })?));
    }
    Ok(())
}

/// Config file path from the environment, if one is set.
pub fn env_config_path() -> Option<PathBuf> {
    env_var_or_none(ENV_CONFIG_PATH).map(PathBuf::from)
}
