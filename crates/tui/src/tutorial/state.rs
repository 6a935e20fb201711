//! Tutorial state machine.
//!
//! Responsibilities:
//! - Hold the current interaction stage and the captured popup position
//! - Apply primary activation, secondary activation and the deferred advance
//! - Report which side effect a transition requires
//!
//! Does NOT handle:
//! - Timers (see `runtime::deferred`)
//! - Rendering or hit-testing (see the `app` and `ui` modules)
//!
//! Invariants:
//! - Stages only move forward; there is no path back to an earlier stage.
//! - Triggers that do not apply to the current stage leave state untouched.
//! - Re-triggering secondary activation in the terminal stage re-captures the
//!   popup position and keeps the stage.

use std::time::Duration;

use ratatui::layout::Rect;

use super::stage::InteractionStage;

/// Interactive controls the tutorial asks the renderer about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// "Click this Button".
    CallToAction,
    /// "Secondary or Right-Click this button".
    ContextTarget,
}

/// Capability provided by the rendering layer: where is a control on screen right now?
///
/// Returns `None` when the control is not currently drawn.
pub trait ControlBounds {
    fn bounds_of(&self, control: Control) -> Option<Rect>;
}

/// Screen position (column, row) of the popup menu's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopupPosition {
    pub x: u16,
    pub y: u16,
}

impl PopupPosition {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Top-right corner of a control's bounding rectangle.
    pub fn top_right_of(rect: Rect) -> Self {
        Self {
            x: rect.right(),
            y: rect.top(),
        }
    }
}

/// Work the runtime must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Fire `Action::DeferredAdvance` once after the given delay.
    ScheduleAdvance(Duration),
}

/// A stage transition that actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageChange {
    pub from: InteractionStage,
    pub to: InteractionStage,
    pub effect: Option<Effect>,
}

/// Tracks the tutorial stage and the popup position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialState {
    stage: InteractionStage,
    popup_position: PopupPosition,
    auto_advance: Duration,
}

impl TutorialState {
    /// Creates a tutorial at the `Initial` stage.
    pub fn new(auto_advance: Duration) -> Self {
        Self {
            stage: InteractionStage::Initial,
            popup_position: PopupPosition::default(),
            auto_advance,
        }
    }

    pub fn stage(&self) -> InteractionStage {
        self.stage
    }

    /// Last captured popup position. Only meaningful in `ContextMenuOpened`.
    pub fn popup_position(&self) -> PopupPosition {
        self.popup_position
    }

    /// Whether the context menu overlay should be shown.
    pub fn is_context_menu_open(&self) -> bool {
        self.stage == InteractionStage::ContextMenuOpened
    }

    /// Primary activation on the call-to-action.
    ///
    /// Only valid in `Initial`; the returned change asks for the deferred advance.
    pub fn primary_activation(&mut self) -> Option<StageChange> {
        if self.stage != InteractionStage::Initial {
            tracing::debug!(stage = %self.stage, "Ignoring primary activation");
            return None;
        }
        Some(self.enter(
            InteractionStage::Clicked,
            Some(Effect::ScheduleAdvance(self.auto_advance)),
        ))
    }

    /// The deferred timer fired.
    ///
    /// Only valid in `Clicked`; stale or duplicate timers are ignored.
    pub fn deferred_advance(&mut self) -> Option<StageChange> {
        if self.stage != InteractionStage::Clicked {
            tracing::debug!(stage = %self.stage, "Ignoring deferred advance");
            return None;
        }
        Some(self.enter(InteractionStage::RightClickIntro, None))
    }

    /// Secondary (contextual) activation on the right-click target.
    ///
    /// Captures the target's top-right corner as the popup position. If the
    /// target is not on screen the capture is skipped and the previous
    /// position is kept. In `ContextMenuOpened` this only re-captures.
    pub fn secondary_activation(&mut self, bounds: &dyn ControlBounds) -> Option<StageChange> {
        match self.stage {
            InteractionStage::RightClickIntro => {
                self.capture_popup_position(bounds);
                Some(self.enter(InteractionStage::ContextMenuOpened, None))
            }
            InteractionStage::ContextMenuOpened => {
                self.capture_popup_position(bounds);
                None
            }
            InteractionStage::Initial | InteractionStage::Clicked => {
                tracing::debug!(stage = %self.stage, "Ignoring secondary activation");
                None
            }
        }
    }

    fn capture_popup_position(&mut self, bounds: &dyn ControlBounds) {
        match bounds.bounds_of(Control::ContextTarget) {
            Some(rect) => {
                self.popup_position = PopupPosition::top_right_of(rect);
                tracing::debug!(
                    x = self.popup_position.x,
                    y = self.popup_position.y,
                    "Captured popup position"
                );
            }
            None => {
                tracing::debug!("Right-click target not on screen, keeping popup position");
            }
        }
    }

    fn enter(&mut self, to: InteractionStage, effect: Option<Effect>) -> StageChange {
        let from = self.stage;
        self.stage = to;
        tracing::info!(%from, %to, "Stage transition");
        StageChange { from, to, effect }
    }
}

impl Default for TutorialState {
    fn default() -> Self {
        Self::new(Duration::from_millis(
            click_tutorial_config::constants::DEFAULT_AUTO_ADVANCE_MS,
        ))
    }
}
