//! Tests for error types

use service_pipeline::core::PipelineError;

#[test]
fn test_invalid_config_error() {
    let err = PipelineError::InvalidConfig("station_count must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid configuration: station_count must be greater than 0"
    );
    assert!(!err.is_fatal());
}

#[test]
fn test_invariant_violation_error() {
    let err = PipelineError::InvariantViolation("reserve while full".to_string());
    assert_eq!(format!("{}", err), "invariant violated: reserve while full");
    assert!(err.is_fatal());
}

#[test]
fn test_shutting_down_error() {
    let err = PipelineError::ShuttingDown;
    assert_eq!(format!("{}", err), "pipeline is shutting down");
    assert!(!err.is_fatal());
}

#[test]
fn test_actor_error() {
    let err = PipelineError::Actor("clock actor panicked".to_string());
    assert_eq!(format!("{}", err), "actor failure: clock actor panicked");
    assert!(err.is_fatal());
}
