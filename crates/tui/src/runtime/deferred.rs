//! The one-shot timer that moves the tutorial past the click success message.
//!
//! Responsibilities:
//! - Send `Action::DeferredAdvance` once, after a delay, on a separate task.
//! - Cancel the pending timer on quit or when the owner is dropped.
//!
//! Does NOT handle:
//! - Deciding whether the advance is still valid when it arrives
//!   (`TutorialState::deferred_advance` ignores stale timers).
//!
//! Invariants:
//! - At most one timer is pending; scheduling while one is pending is a no-op.
//! - Once cancelled, nothing new can be scheduled.

use std::time::Duration;

use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::action::Action;

#[derive(Debug)]
struct PendingTimer {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

/// Owner of the deferred-transition task.
#[derive(Debug, Default)]
pub struct DeferredTransition {
    shutdown: CancellationToken,
    pending: Option<PendingTimer>,
}

impl DeferredTransition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send `Action::DeferredAdvance` to `tx` after `delay`.
    ///
    /// Returns `false` when a timer is already pending or the owner was
    /// cancelled. Must be called from within a tokio runtime.
    pub fn schedule(&mut self, delay: Duration, tx: Sender<Action>) -> bool {
        if self.shutdown.is_cancelled() {
            tracing::debug!("Deferred transition cancelled, not scheduling");
            return false;
        }
        if self.is_pending() {
            tracing::debug!("Deferred transition already pending");
            return false;
        }

        let token = self.shutdown.child_token();
        let task_token = token.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => {
                    tracing::debug!("Deferred transition cancelled before firing");
                }
                _ = tokio::time::sleep(delay) => {
                    if tx.send(Action::DeferredAdvance).await.is_err() {
                        tracing::debug!("Action channel closed, dropping deferred transition");
                    }
                }
            }
        });

        tracing::debug!(delay_ms = delay.as_millis() as u64, "Scheduled deferred transition");
        self.pending = Some(PendingTimer { token, handle });
        true
    }

    /// Whether a scheduled timer has not yet fired or been cancelled.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|timer| !timer.handle.is_finished() && !timer.token.is_cancelled())
    }

    /// Cancel the pending timer and refuse future schedules.
    pub fn cancel(&mut self) {
        self.shutdown.cancel();
        if let Some(timer) = self.pending.take() {
            timer.token.cancel();
        }
    }
}

impl Drop for DeferredTransition {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
