//! Builders to construct coordinators from configuration.

use crate::config::PipelineConfig;
use crate::core::{CompletionSink, Coordinator, PipelineError, RoutingPolicy};

/// Build a coordinator from a validated configuration with the default router.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidConfig`] if the configuration is rejected.
pub fn build_coordinator<S>(cfg: &PipelineConfig, sink: S) -> Result<Coordinator, PipelineError>
where
    S: CompletionSink + 'static,
{
    cfg.validate()
        .map_err(|e| PipelineError::InvalidConfig(format!("config invalid: {e}")))?;
    Coordinator::new(cfg.clone(), sink)
}

/// Build a coordinator with a caller-supplied routing policy.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidConfig`] if the configuration is rejected.
pub fn build_coordinator_with_router<R, S>(
    cfg: &PipelineConfig,
    router: R,
    sink: S,
) -> Result<Coordinator<R>, PipelineError>
where
    R: RoutingPolicy,
    S: CompletionSink + 'static,
{
    cfg.validate()
        .map_err(|e| PipelineError::InvalidConfig(format!("config invalid: {e}")))?;
    Coordinator::with_router(cfg.clone(), router, sink)
}

/// Parse a JSON configuration and build a coordinator from it.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidConfig`] on parse or validation failure.
pub fn build_from_json<S>(input: &str, sink: S) -> Result<Coordinator, PipelineError>
where
    S: CompletionSink + 'static,
{
    let cfg = PipelineConfig::from_json_str(input).map_err(PipelineError::InvalidConfig)?;
    Coordinator::new(cfg, sink)
}
