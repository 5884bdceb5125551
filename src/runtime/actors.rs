//! Native-thread actors driving the coordinator.
//!
//! - The clock actor advances simulated time once per tick interval. It waits
//!   on a stop channel between ticks, so a stop request ends the wait at once.
//! - The admission actor runs admission passes until every station is empty.
//!
//! Both run on dedicated, named OS threads.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, RecvTimeoutError, Sender};
use tracing::{debug, info, warn};

use crate::core::{Coordinator, PipelineError, RoutingPolicy};

/// Handle to the clock actor thread.
pub struct ClockActor {
    /// Dropping the sender disconnects the actor's receiver and stops it.
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<u64>>,
}

impl ClockActor {
    /// Spawn a thread calling [`Coordinator::advance_clock`] every `tick_interval`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Actor`] if the thread cannot be spawned.
    pub fn spawn<R>(coordinator: Arc<Coordinator<R>>, tick_interval: Duration) -> Result<Self, PipelineError>
    where
        R: RoutingPolicy + 'static,
    {
        let (stop_tx, stop_rx) = bounded::<()>(1);

        let handle = thread::Builder::new()
            .name("pipeline-clock".into())
            .spawn(move || {
                debug!(interval = ?tick_interval, "clock actor started");
                let mut ticks = 0u64;
                loop {
                    match stop_rx.recv_timeout(tick_interval) {
                        Err(RecvTimeoutError::Timeout) => {
                            coordinator.advance_clock();
                            ticks += 1;
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                debug!(ticks, "clock actor exiting");
                ticks
            })
            .map_err(|e| PipelineError::Actor(format!("failed to spawn clock actor: {e}")))?;

        Ok(Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Signal the actor to stop and join it. Returns the number of ticks it drove.
    ///
    /// Returns without waiting out the current tick interval.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Actor`] if the thread panicked.
    pub fn stop(mut self) -> Result<u64, PipelineError> {
        drop(self.stop_tx.take());
        match self.handle.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| PipelineError::Actor("clock actor panicked".into())),
            None => Ok(0),
        }
    }
}

impl Drop for ClockActor {
    fn drop(&mut self) {
        // Signal stop but don't join; stop() is the graceful path.
        drop(self.stop_tx.take());
        if self.handle.is_some() {
            debug!("clock actor dropped without stop, thread exits without being joined");
        }
    }
}

/// Handle to the admission actor thread.
pub struct AdmissionActor {
    handle: JoinHandle<Result<u64, PipelineError>>,
}

impl AdmissionActor {
    /// Spawn a thread running [`run_admission`] against `coordinator`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Actor`] if the thread cannot be spawned.
    pub fn spawn<R>(coordinator: Arc<Coordinator<R>>) -> Result<Self, PipelineError>
    where
        R: RoutingPolicy + 'static,
    {
        let handle = thread::Builder::new()
            .name("pipeline-admission".into())
            .spawn(move || run_admission(&coordinator))
            .map_err(|e| PipelineError::Actor(format!("failed to spawn admission actor: {e}")))?;
        Ok(Self { handle })
    }

    /// Wait for the actor to drain every station. Returns the number of passes.
    ///
    /// # Errors
    ///
    /// Propagates the actor's own error, or [`PipelineError::Actor`] if it panicked.
    pub fn join(self) -> Result<u64, PipelineError> {
        self.handle
            .join()
            .map_err(|_| PipelineError::Actor("admission actor panicked".into()))?
    }
}

/// Run admission passes until every station queue is empty.
///
/// Returns the number of passes made.
///
/// # Errors
///
/// Stops at the first error from [`Coordinator::admit_one`].
pub fn run_admission<R: RoutingPolicy>(coordinator: &Coordinator<R>) -> Result<u64, PipelineError> {
    let mut passes = 0u64;
    while coordinator.queued() > 0 {
        match coordinator.admit_one() {
            Ok(admitted) => {
                passes += 1;
                debug!(pass = passes, admitted, "admission pass complete");
            }
            Err(PipelineError::ShuttingDown) => {
                info!(passes, "admission stopped by shutdown");
                return Err(PipelineError::ShuttingDown);
            }
            Err(e) => {
                warn!(error = %e, "admission actor terminating");
                return Err(e);
            }
        }
    }
    Ok(passes)
}
