//! Builders to construct pipeline components from configuration.

pub mod pipeline_builder;

pub use pipeline_builder::{build_coordinator, build_coordinator_with_router, build_from_json};
