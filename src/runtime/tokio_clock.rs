//! Tokio-driven clock task and blocking admission bridge.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::core::{Coordinator, PipelineError, RoutingPolicy};
use crate::runtime::actors::run_admission;

/// Handle to a clock task running on a tokio runtime.
pub struct TokioClockHandle {
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<u64>,
}

impl TokioClockHandle {
    /// Signal the task to stop and await it. Returns the number of ticks it drove.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Actor`] if the task panicked or was cancelled.
    pub async fn stop(self) -> Result<u64, PipelineError> {
        // receiver may already be gone if the task ended
        let _ = self.stop_tx.send(true);
        self.task
            .await
            .map_err(|e| PipelineError::Actor(format!("clock task failed: {e}")))
    }
}

/// Spawn a clock task on the current tokio runtime that advances the
/// coordinator once per `tick_interval`.
///
/// Must be called from within a tokio runtime.
pub fn spawn_clock_task<R>(coordinator: Arc<Coordinator<R>>, tick_interval: Duration) -> TokioClockHandle
where
    R: RoutingPolicy + 'static,
{
    let (stop_tx, mut stop_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // first tick completes immediately
        ticker.tick().await;

        let mut ticks = 0u64;
        loop {
            tokio::select! {
                changed = stop_rx.changed() => {
                    if changed.is_err() || *stop_rx.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    coordinator.advance_clock();
                    ticks += 1;
                }
            }
        }
        tracing::debug!(ticks, "clock task exiting");
        ticks
    });

    TokioClockHandle { stop_tx, task }
}

/// Run admission passes on the blocking pool until every station is empty.
///
/// # Errors
///
/// Propagates admission errors, or [`PipelineError::Actor`] if the blocking
/// task panicked.
pub async fn run_admission_blocking<R>(coordinator: Arc<Coordinator<R>>) -> Result<u64, PipelineError>
where
    R: RoutingPolicy + 'static,
{
    tokio::task::spawn_blocking(move || run_admission(&coordinator))
        .await
        .map_err(|e| PipelineError::Actor(format!("admission task failed: {e}")))?
}
