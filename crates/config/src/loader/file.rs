//! Config file loading.
//!
//! Responsibilities:
//! - Resolve the config file location (explicit path, env var, platform default).
//! - Parse the optional JSON config file and apply it to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Environment variable parsing (see env.rs).
//! - Building the final TutorialConfig (see builder.rs).
//!
//! Invariants:
//! - File settings are applied before environment variables (env vars take precedence).
//! - A missing file is not an error; an unreadable or malformed file is.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

use super::builder::ConfigLoader;
use super::env::env_config_path;
use super::error::ConfigError;
use crate::types::ColorTheme;

/// On-disk shape of the config file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FileConfig {
    pub theme: Option<ColorTheme>,
    pub auto_advance_ms: Option<u64>,
    pub reduce_motion: Option<bool>,
}

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/click-tutorial/config.json`
/// - macOS: `~/Library/Application Support/click-tutorial/config.json`
/// - Windows: `%AppData%\click-tutorial\config\config.json`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", "click-tutorial")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join("config.json"))
}

/// Resolve which config file to read.
///
/// Precedence: explicit loader path > `CLICK_TUTORIAL_CONFIG_PATH` > platform default.
fn resolve_config_path(loader: &ConfigLoader) -> Result<PathBuf, ConfigError> {
    if let Some(path) = loader.config_path() {
        return Ok(path.clone());
    }
    if let Some(path) = env_config_path() {
        return Ok(path);
    }
    default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))
}

pub(crate) fn read_file_config(path: &Path) -> Result<Option<FileConfig>, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::ConfigFileRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let parsed =
        serde_json::from_str(&contents).map_err(|source| ConfigError::ConfigFileParse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Some(parsed))
}

/// Apply the config file (if present) to the loader.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let path = resolve_config_path(loader)?;
    let Some(file) = read_file_config(&path)? else {
        tracing::debug!(path = %path.display(), "No config file found, using defaults");
        return Ok(());
    };

    tracing::debug!(path = %path.display(), "Loaded config file");
    if let Some(theme) = file.theme {
        loader.set_theme(Some(theme));
    }
    if let Some(millis) = file.auto_advance_ms {
        loader.set_auto_advance(Some(Duration::from_millis(millis)));
    }
    if let Some(reduce) = file.reduce_motion {
        loader.set_reduce_motion(Some(reduce));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_ends_with_project_file() {
        let path = default_config_path().unwrap();
        assert!(path.ends_with("config.json"));
        assert!(path.to_string_lossy().contains("click-tutorial"));
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = read_file_config(&dir.path().join("absent.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_partial_file_leaves_other_fields_unset() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"theme": "light"}"#).unwrap();

        let file = read_file_config(&path).unwrap().unwrap();
        assert_eq!(file.theme, Some(ColorTheme::Light));
        assert!(file.auto_advance_ms.is_none());
        assert!(file.reduce_motion.is_none());
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = read_file_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigFileParse { .. }));
        assert!(err.to_string().contains("config.json"));
    }
}
