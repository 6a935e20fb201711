//! Runtime configuration for the tutorial screen.
//!
//! Responsibilities:
//! - Define the resolved `TutorialConfig` consumed by the TUI crate.
//! - Provide serialization helpers for `Duration` (milliseconds).
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//!
//! Invariants:
//! - `auto_advance` is within `MIN_AUTO_ADVANCE_MS..=MAX_AUTO_ADVANCE_MS` once built by the loader.
//! - Duration fields are serialized as milliseconds (integers).

use crate::constants::DEFAULT_AUTO_ADVANCE_MS;
use crate::types::theme::ColorTheme;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as milliseconds (integer).
mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

/// Resolved tutorial configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialConfig {
    /// Color theme for the whole screen.
    pub theme: ColorTheme,
    /// Delay before the click success message gives way to the right-click prompt.
    #[serde(with = "duration_millis", rename = "auto_advance_ms")]
    pub auto_advance: Duration,
    /// Complete every transition instantly and keep hint glyphs still.
    pub reduce_motion: bool,
}

impl Default for TutorialConfig {
    fn default() -> Self {
        Self {
            theme: ColorTheme::Default,
            auto_advance: Duration::from_millis(DEFAULT_AUTO_ADVANCE_MS),
            reduce_motion: false,
        }
    }
}
