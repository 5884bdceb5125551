//! Runtime adapters driving the coordinator: native actor threads, an
//! optional tokio clock task, and the end-to-end simulation driver.

pub mod actors;
pub mod simulation;
#[cfg(feature = "tokio-runtime")]
pub mod tokio_clock;

pub use actors::{run_admission, AdmissionActor, ClockActor};
pub use simulation::{run_scripted_from_env, Simulation, SimulationReport};
#[cfg(feature = "tokio-runtime")]
pub use tokio_clock::{run_admission_blocking, spawn_clock_task, TokioClockHandle};
