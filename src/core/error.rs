//! Error types for pipeline operations.

use thiserror::Error;

/// Errors produced by pipeline components.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Configuration rejected before any actor started.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A capacity or routing invariant was broken. Always fatal.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
    /// The coordinator was shut down while the caller was admitting.
    #[error("pipeline is shutting down")]
    ShuttingDown,
    /// An actor thread or task could not be spawned or joined.
    #[error("actor failure: {0}")]
    Actor(String),
}

impl PipelineError {
    /// Whether this error indicates a logic defect rather than a requested stop.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::InvariantViolation(_) | Self::Actor(_))
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
