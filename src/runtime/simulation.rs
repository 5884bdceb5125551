//! End-to-end simulation driver.
//!
//! Routes a finite arrival feed, then runs the clock and admission actors
//! until every customer has been admitted, and stops the clock.

use std::sync::Arc;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::builders::build_coordinator;
use crate::config::PipelineConfig;
use crate::core::{
    AppResult, Arrival, CompletionRecord, Coordinator, Customer, InMemoryCompletionSink,
    PipelineError, PipelineStats,
};
use crate::runtime::actors::{AdmissionActor, ClockActor};
use crate::util::{init_tracing, scripted_arrivals};

/// Outcome of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Completion records in admission order.
    pub records: Vec<CompletionRecord>,
    /// Coordinator statistics after the last admission.
    pub stats: PipelineStats,
    /// Admission passes made.
    pub passes: u64,
    /// Clock advances driven by the clock actor.
    pub clock_ticks: u64,
}

impl SimulationReport {
    /// Mean wait time over all records.
    #[must_use]
    pub fn average_wait(&self) -> Option<f64> {
        self.stats.average_wait()
    }
}

/// A coordinator wired to an in-memory completion sink.
pub struct Simulation {
    config: PipelineConfig,
    coordinator: Arc<Coordinator>,
    sink: InMemoryCompletionSink,
}

impl Simulation {
    /// Build a simulation from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidConfig`] if the configuration is rejected.
    pub fn new(config: PipelineConfig) -> Result<Self, PipelineError> {
        let sink = InMemoryCompletionSink::new();
        let coordinator = build_coordinator(&config, sink.clone())?;
        Ok(Self {
            config,
            coordinator: Arc::new(coordinator),
            sink,
        })
    }

    /// Shared handle to the underlying coordinator.
    #[must_use]
    pub const fn coordinator(&self) -> &Arc<Coordinator> {
        &self.coordinator
    }

    /// Route every arrival, then run both actors until all stations drain.
    ///
    /// # Errors
    ///
    /// Returns the first admission or actor error. The clock actor is always
    /// stopped before returning.
    pub fn run<I>(self, arrivals: I) -> Result<SimulationReport, PipelineError>
    where
        I: IntoIterator<Item = Arrival>,
    {
        for arrival in arrivals {
            self.coordinator.route(Customer::from(arrival))?;
        }
        info!(queued = self.coordinator.queued(), "arrivals routed, starting actors");

        let clock = ClockActor::spawn(Arc::clone(&self.coordinator), self.config.tick_interval())?;
        let admission = match AdmissionActor::spawn(Arc::clone(&self.coordinator)) {
            Ok(actor) => actor,
            Err(e) => {
                clock.stop()?;
                return Err(e);
            }
        };

        let passes = admission.join();
        let clock_ticks = clock.stop()?;
        let passes = passes?;

        let stats = self.coordinator.stats();
        info!(
            admitted = stats.admitted,
            passes,
            clock_ticks,
            average_wait = stats.average_wait(),
            "simulation complete"
        );
        Ok(SimulationReport {
            records: self.sink.records(),
            stats,
            passes,
            clock_ticks,
        })
    }
}

/// Run the scripted feed (one customer every `spacing` ticks) with
/// configuration taken from the environment.
///
/// # Errors
///
/// Returns configuration or simulation failures with context.
pub fn run_scripted_from_env(customers: u64, spacing: u64) -> AppResult<SimulationReport> {
    init_tracing();
    let config = PipelineConfig::from_env()
        .map_err(anyhow::Error::msg)
        .context("loading pipeline configuration from environment")?;
    let simulation = Simulation::new(config).context("building simulation")?;
    simulation
        .run(scripted_arrivals(customers, spacing))
        .context("running scripted simulation")
}
