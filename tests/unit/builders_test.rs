//! Tests for builder modules

use service_pipeline::builders::{build_coordinator, build_coordinator_with_router, build_from_json};
use service_pipeline::config::PipelineConfig;
use service_pipeline::core::{Customer, NullCompletionSink, PipelineError, RoutingPolicy};

/// Always routes to the last station.
struct LastStation;

impl RoutingPolicy for LastStation {
    fn select(&self, lengths: &[usize]) -> Option<usize> {
        lengths.len().checked_sub(1)
    }
}

/// Names a station that does not exist.
struct OutOfRange;

impl RoutingPolicy for OutOfRange {
    fn select(&self, lengths: &[usize]) -> Option<usize> {
        Some(lengths.len())
    }
}

#[test]
fn test_build_coordinator_from_config() {
    let cfg = PipelineConfig::default().with_station_count(2);
    let coord = build_coordinator(&cfg, NullCompletionSink).unwrap();
    assert_eq!(coord.config().station_count, 2);
    assert_eq!(coord.stats().queued_per_station, vec![0, 0]);
    assert_eq!(coord.stats().capacity, 4);
}

#[test]
fn test_build_coordinator_rejects_invalid() {
    let cfg = PipelineConfig::default().with_resource_capacity(0);
    let result = build_coordinator(&cfg, NullCompletionSink);
    match result {
        Err(PipelineError::InvalidConfig(msg)) => assert!(msg.contains("resource_capacity")),
        _ => panic!("expected invalid config"),
    }
}

#[test]
fn test_build_with_custom_router() {
    let cfg = PipelineConfig::default();
    let coord = build_coordinator_with_router(&cfg, LastStation, NullCompletionSink).unwrap();
    assert_eq!(coord.route(Customer::new(1, 0)).unwrap(), 2);
    assert_eq!(coord.route(Customer::new(2, 0)).unwrap(), 2);
    assert_eq!(coord.stats().queued_per_station, vec![0, 0, 2]);
}

#[test]
fn test_out_of_range_router_is_invariant_violation() {
    let cfg = PipelineConfig::default();
    let coord = build_coordinator_with_router(&cfg, OutOfRange, NullCompletionSink).unwrap();
    let result = coord.route(Customer::new(1, 0));
    assert!(matches!(result, Err(PipelineError::InvariantViolation(_))));
    assert_eq!(coord.queued(), 0);
}

#[test]
fn test_build_from_json() {
    let coord = build_from_json(r#"{"station_count": 4}"#, NullCompletionSink).unwrap();
    assert_eq!(coord.config().station_count, 4);

    let result = build_from_json(r#"{"cook_duration": 0}"#, NullCompletionSink);
    assert!(matches!(result, Err(PipelineError::InvalidConfig(_))));
}
