//! Centralized constants for the click tutorial workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Tutorial Timing
// =============================================================================

/// Delay between the successful click and the right-click introduction, in milliseconds.
pub const DEFAULT_AUTO_ADVANCE_MS: u64 = 2000;

/// Smallest accepted auto-advance delay in milliseconds.
pub const MIN_AUTO_ADVANCE_MS: u64 = 1;

/// Largest accepted auto-advance delay in milliseconds (1 minute).
pub const MAX_AUTO_ADVANCE_MS: u64 = 60_000;

// =============================================================================
// Animation Defaults
// =============================================================================

/// Duration of the fade + slide transition for content blocks, in milliseconds.
pub const CONTENT_TRANSITION_MS: u64 = 500;

/// Duration of the fade + scale transition for the context menu, in milliseconds.
pub const MENU_TRANSITION_MS: u64 = 200;

/// Vertical displacement of a content block at the start of its enter
/// transition and at the end of its exit transition, in rows.
pub const CONTENT_SLIDE_ROWS: u16 = 3;

/// Scale of the context menu when its enter transition starts.
pub const MENU_INITIAL_SCALE: f32 = 0.9;

/// Period of the hint glyph bounce above the right-click target, in milliseconds.
pub const HINT_BOUNCE_PERIOD_MS: u64 = 1000;

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Frame tick interval while the tutorial is running, in milliseconds (~30 fps).
pub const DEFAULT_FRAME_TICK_MS: u64 = 33;

/// Maximum width of tutorial paragraphs, in columns.
pub const CONTENT_MAX_WIDTH: u16 = 60;

/// Name of the rolling log file written by the binary.
pub const LOG_FILE_NAME: &str = "click-tutorial.log";
