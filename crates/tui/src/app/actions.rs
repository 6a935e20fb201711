//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Apply tutorial triggers to the state machine
//! - Start the content and menu transitions a stage change implies
//! - Hand timer work back to the runtime as an `Effect`
//!
//! Non-responsibilities:
//! - Does NOT create Actions from raw input (see `input` and `mouse`)
//! - Does NOT spawn tasks (see `runtime::deferred`)

use std::time::Instant;

use click_tutorial_config::constants::{MENU_INITIAL_SCALE, MENU_TRANSITION_MS};
use ratatui::layout::Rect;

use crate::action::Action;
use crate::app::App;
use crate::tutorial::{ContentBlock, Effect, InteractionStage, StageChange};
use crate::ui::transition::Transition;

impl App {
    /// Pure state mutation based on Action.
    pub fn update(&mut self, action: Action) -> Option<Effect> {
        self.update_at(action, Instant::now())
    }

    /// Apply `action` as if it happened at `now`.
    ///
    /// Raw `Input` and `Mouse` actions are ignored here; translate them with
    /// `handle_input` / `handle_mouse` first.
    pub fn update_at(&mut self, action: Action, now: Instant) -> Option<Effect> {
        let change = match action {
            Action::PrimaryActivation => self.tutorial.primary_activation(),
            Action::SecondaryActivation => self.tutorial.secondary_activation(&self.regions),
            Action::DeferredAdvance => self.tutorial.deferred_advance(),
            Action::Tick => {
                self.presenter.tick(now);
                None
            }
            Action::Resize(width, height) => {
                tracing::debug!(width, height, "Terminal resized");
                self.last_area = Rect::new(0, 0, width, height);
                None
            }
            Action::Quit | Action::Input(_) | Action::Mouse(_) => None,
        }?;
        self.apply_stage_change(change, now)
    }

    fn apply_stage_change(&mut self, change: StageChange, now: Instant) -> Option<Effect> {
        self.presenter.show(ContentBlock::for_stage(change.to), now);

        if change.to == InteractionStage::ContextMenuOpened {
            self.menu_transition = Some(Transition::enter_scale(
                now,
                self.transition_duration(MENU_TRANSITION_MS),
                MENU_INITIAL_SCALE,
            ));
        }
        // The pointer is likely still over the control that was just replaced
        self.hover = None;

        tracing::debug!(
            from = %change.from,
            to = %change.to,
            reduce_motion = self.reduce_motion,
            "Started stage transition"
        );
        change.effect
    }
}
