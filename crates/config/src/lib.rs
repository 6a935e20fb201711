//! Configuration management for the click tutorial.
//!
//! This crate provides the constants, theme types and layered loader
//! (config file, environment variables, CLI overrides) for the tutorial screen.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, ENV_AUTO_ADVANCE_MS, ENV_CONFIG_PATH, ENV_REDUCE_MOTION, ENV_THEME,
    default_config_path, env_var_or_none,
};
pub use types::{ColorTheme, Theme, TutorialConfig};
