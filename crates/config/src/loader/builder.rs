//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from a config file, environment variables, and direct builder methods.
//! - Build and validate the final `TutorialConfig`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file parsing logic (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Values applied later win: call `from_file`, then `from_env`, then `with_*` for CLI overrides.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{DEFAULT_AUTO_ADVANCE_MS, MAX_AUTO_ADVANCE_MS, MIN_AUTO_ADVANCE_MS};
use crate::types::{ColorTheme, TutorialConfig};

/// Configuration loader that builds config from a file, environment variables and overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    theme: Option<ColorTheme>,
    auto_advance: Option<Duration>,
    reduce_motion: Option<bool>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from the config file, if one exists.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    ///
    /// Environment variables take precedence over config file settings.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the color theme.
    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Set the auto-advance delay.
    pub fn with_auto_advance(mut self, delay: Duration) -> Self {
        self.auto_advance = Some(delay);
        self
    }

    /// Set whether transitions are skipped.
    pub fn with_reduce_motion(mut self, reduce: bool) -> Self {
        self.reduce_motion = Some(reduce);
        self
    }

    pub(crate) fn set_theme(&mut self, theme: Option<ColorTheme>) {
        self.theme = theme;
    }

    pub(crate) fn set_auto_advance(&mut self, delay: Option<Duration>) {
        self.auto_advance = delay;
    }

    pub(crate) fn set_reduce_motion(&mut self, reduce: Option<bool>) {
        self.reduce_motion = reduce;
    }

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<TutorialConfig, ConfigError> {
        let auto_advance = self
            .auto_advance
            .unwrap_or(Duration::from_millis(DEFAULT_AUTO_ADVANCE_MS));
        Self::validate_auto_advance(auto_advance)?;

        Ok(TutorialConfig {
            theme: self.theme.unwrap_or_default(),
            auto_advance,
            reduce_motion: self.reduce_motion.unwrap_or(false),
        })
    }

    fn validate_auto_advance(delay: Duration) -> Result<(), ConfigError> {
        let millis = delay.as_millis();
        if millis < u128::from(MIN_AUTO_ADVANCE_MS) || millis > u128::from(MAX_AUTO_ADVANCE_MS) {
            return Err(ConfigError::InvalidAutoAdvance {
                message: format!(
                    "must be between {} and {} milliseconds (got {})",
                    MIN_AUTO_ADVANCE_MS, MAX_AUTO_ADVANCE_MS, millis
                ),
            });
        }
        Ok(())
    }
}
