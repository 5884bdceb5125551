//! Shared utilities.

pub mod arrivals;
pub mod telemetry;

pub use arrivals::*;
pub use telemetry::*;
