//! Application state and rendering.
//!
//! This module ties the tutorial state machine to the terminal: it turns raw
//! input into tutorial triggers, applies them, starts the matching
//! transitions, and draws the frame.
//!
//! The module is organized into submodules:
//! - `actions`: Action handling and stage-change bookkeeping
//! - `input`: Keyboard bindings
//! - `mouse`: Mouse hit-testing and hover
//! - `render`: Rendering logic

mod actions;
mod input;
mod mouse;
mod render;

use std::time::{Duration, Instant};

use click_tutorial_config::constants::CONTENT_TRANSITION_MS;
use click_tutorial_config::{Theme, TutorialConfig};
use ratatui::layout::{Position, Rect};

use crate::tutorial::{ContentBlock, Control, ControlBounds, TutorialState};
use crate::ui::ContentPresenter;
use crate::ui::transition::Transition;

/// What the pointer is currently over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    Control(Control),
    /// Index into `MENU_ITEMS`.
    MenuRow(usize),
}

/// Where interactive elements were drawn in the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlRegions {
    pub call_to_action: Option<Rect>,
    pub context_target: Option<Rect>,
    pub menu_rows: Vec<Rect>,
}

impl ControlRegions {
    fn clear(&mut self) {
        self.call_to_action = None;
        self.context_target = None;
        self.menu_rows.clear();
    }

    fn set(&mut self, control: Control, rect: Rect) {
        match control {
            Control::CallToAction => self.call_to_action = Some(rect),
            Control::ContextTarget => self.context_target = Some(rect),
        }
    }

    /// The control under a screen cell, if any.
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let position = Position::new(column, row);
        [Control::CallToAction, Control::ContextTarget]
            .into_iter()
            .find(|&control| {
                self.bounds_of(control)
                    .is_some_and(|rect| rect.contains(position))
            })
    }

    /// The menu row under a screen cell, if any.
    pub fn menu_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.menu_rows
            .iter()
            .position(|rect| rect.contains(position))
    }
}

impl ControlBounds for ControlRegions {
    fn bounds_of(&self, control: Control) -> Option<Rect> {
        match control {
            Control::CallToAction => self.call_to_action,
            Control::ContextTarget => self.context_target,
        }
    }
}

/// Main application state.
pub struct App {
    tutorial: TutorialState,
    pub theme: Theme,
    presenter: ContentPresenter,
    /// Started when the context menu opens.
    menu_transition: Option<Transition>,
    regions: ControlRegions,
    hover: Option<HoverTarget>,
    reduce_motion: bool,
    /// Frame area from the last render, for layout calculations.
    pub last_area: Rect,
}

impl App {
    pub fn new(config: TutorialConfig) -> Self {
        Self::new_at(config, Instant::now())
    }

    /// Create the app with its first block entering at `now`.
    pub fn new_at(config: TutorialConfig, now: Instant) -> Self {
        let tutorial = TutorialState::new(config.auto_advance);
        let presenter = ContentPresenter::new(
            ContentBlock::for_stage(tutorial.stage()),
            now,
            motion_duration(config.reduce_motion, CONTENT_TRANSITION_MS),
        );
        Self {
            tutorial,
            theme: Theme::from_color_theme(config.theme),
            presenter,
            menu_transition: None,
            regions: ControlRegions::default(),
            hover: None,
            reduce_motion: config.reduce_motion,
            last_area: Rect::default(),
        }
    }

    pub fn tutorial(&self) -> &TutorialState {
        &self.tutorial
    }

    pub fn presenter(&self) -> &ContentPresenter {
        &self.presenter
    }

    /// Control and menu row rectangles from the last frame.
    pub fn regions(&self) -> &ControlRegions {
        &self.regions
    }

    pub fn hover(&self) -> Option<HoverTarget> {
        self.hover
    }

    fn transition_duration(&self, millis: u64) -> Duration {
        motion_duration(self.reduce_motion, millis)
    }
}

/// Transition length, or zero when motion is reduced.
fn motion_duration(reduce_motion: bool, millis: u64) -> Duration {
    if reduce_motion {
        Duration::ZERO
    } else {
        Duration::from_millis(millis)
    }
}
