//! Mounts exactly one content block at a time.
//!
//! When the shown block changes, the old block plays its exit transition to
//! completion before the new block is mounted and plays its enter transition.
//! A change requested while an exit is already running replaces the block
//! waiting to enter; the running exit is not restarted.

use std::time::{Duration, Instant};

use click_tutorial_config::constants::CONTENT_SLIDE_ROWS;

use crate::tutorial::ContentBlock;
use crate::ui::transition::{Phase, Transition};

#[derive(Debug, Clone)]
pub struct ContentPresenter {
    mounted: ContentBlock,
    transition: Transition,
    pending: Option<ContentBlock>,
    mounted_at: Instant,
    duration: Duration,
}

impl ContentPresenter {
    /// Mount `block` and start its enter transition at `now`.
    pub fn new(block: ContentBlock, now: Instant, duration: Duration) -> Self {
        Self {
            mounted: block,
            transition: Transition::enter_slide(now, duration, CONTENT_SLIDE_ROWS),
            pending: None,
            mounted_at: now,
            duration,
        }
    }

    /// The block currently on screen, entering, resting or exiting.
    pub fn mounted(&self) -> ContentBlock {
        self.mounted
    }

    /// The block that will be mounted once the running exit completes.
    pub fn pending(&self) -> Option<ContentBlock> {
        self.pending
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// When the mounted block started entering.
    pub fn mounted_at(&self) -> Instant {
        self.mounted_at
    }

    /// Request that `block` be shown.
    pub fn show(&mut self, block: ContentBlock, now: Instant) {
        let target = self.pending.unwrap_or(self.mounted);
        if block == target {
            return;
        }

        match self.transition.phase() {
            Phase::Exit => {
                tracing::debug!(
                    exiting = self.mounted.key(),
                    next = block.key(),
                    "Replacing block queued behind exit"
                );
            }
            Phase::Enter => {
                self.transition = Transition::exit_slide(now, self.duration, CONTENT_SLIDE_ROWS);
            }
        }
        self.pending = Some(block);
        self.tick(now);
    }

    /// Mount the pending block once the exit has finished.
    pub fn tick(&mut self, now: Instant) {
        if self.transition.phase() != Phase::Exit || !self.transition.is_finished_at(now) {
            return;
        }
        if let Some(next) = self.pending.take() {
            tracing::debug!(from = self.mounted.key(), to = next.key(), "Mounting block");
            self.mounted = next;
            self.transition = Transition::enter_slide(now, self.duration, CONTENT_SLIDE_ROWS);
            self.mounted_at = now;
        }
    }
}
