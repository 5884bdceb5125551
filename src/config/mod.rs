//! Configuration models for the pipeline and its clock cadence.

pub mod pipeline;

pub use pipeline::{PipelineConfig, ReleasePolicy};
