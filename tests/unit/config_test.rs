//! Tests for configuration validation

use std::collections::HashMap;

use service_pipeline::config::{PipelineConfig, ReleasePolicy};

#[test]
fn test_default_config_is_valid() {
    let cfg = PipelineConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.station_count, 3);
    assert_eq!(cfg.resource_capacity, 4);
    assert_eq!(cfg.cook_duration, 10);
    assert_eq!(cfg.handoff_ticks, 1);
    assert_eq!(cfg.release_policy, ReleasePolicy::SinglePerTick);
}

#[test]
fn test_invalid_station_count() {
    let cfg = PipelineConfig::default().with_station_count(0);
    assert!(cfg.validate().is_err());
}

#[test]
fn test_invalid_resource_capacity() {
    let cfg = PipelineConfig::default().with_resource_capacity(0);
    assert!(cfg.validate().is_err());
}

#[test]
fn test_invalid_cook_duration() {
    let cfg = PipelineConfig::default().with_cook_duration(0);
    assert!(cfg.validate().is_err());
}

#[test]
fn test_invalid_tick_interval() {
    let cfg = PipelineConfig::default().with_tick_interval_ms(0);
    assert!(cfg.validate().is_err());
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "station_count": 2,
        "resource_capacity": 8,
        "cook_duration": 5,
        "tick_interval_ms": 20,
        "release_policy": "drain_due"
    }"#;

    let cfg = PipelineConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.station_count, 2);
    assert_eq!(cfg.resource_capacity, 8);
    assert_eq!(cfg.cook_duration, 5);
    assert_eq!(cfg.tick_interval_ms, 20);
    // omitted fields fall back to defaults
    assert_eq!(cfg.handoff_ticks, 1);
    assert_eq!(cfg.release_policy, ReleasePolicy::DrainDue);
}

#[test]
fn test_config_from_json_rejects_invalid() {
    assert!(PipelineConfig::from_json_str(r#"{"station_count": 0}"#).is_err());
    assert!(PipelineConfig::from_json_str("not json").is_err());
}

#[test]
fn test_config_from_lookup() {
    let vars: HashMap<&str, &str> = [
        ("PIPELINE_STATION_COUNT", "5"),
        ("PIPELINE_RESOURCE_CAPACITY", " 2 "),
        ("PIPELINE_HANDOFF_TICKS", "0"),
        ("PIPELINE_RELEASE_POLICY", "drain_due"),
    ]
    .into_iter()
    .collect();

    let cfg = PipelineConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_string())).unwrap();
    assert_eq!(cfg.station_count, 5);
    assert_eq!(cfg.resource_capacity, 2);
    assert_eq!(cfg.cook_duration, 10);
    assert_eq!(cfg.handoff_ticks, 0);
    assert_eq!(cfg.release_policy, ReleasePolicy::DrainDue);
}

#[test]
fn test_handoff_ticks_setter_and_bad_value() {
    let cfg = PipelineConfig::default().with_handoff_ticks(3);
    assert_eq!(cfg.handoff_ticks, 3);
    assert!(cfg.validate().is_ok());

    let err = PipelineConfig::from_lookup(|key| {
        (key == "PIPELINE_HANDOFF_TICKS").then(|| "-1".to_string())
    })
    .unwrap_err();
    assert!(err.contains("PIPELINE_HANDOFF_TICKS"));
}

#[test]
fn test_config_from_lookup_rejects_bad_values() {
    let err = PipelineConfig::from_lookup(|key| {
        (key == "PIPELINE_COOK_DURATION").then(|| "soon".to_string())
    })
    .unwrap_err();
    assert!(err.contains("PIPELINE_COOK_DURATION"));

    let err = PipelineConfig::from_lookup(|key| {
        (key == "PIPELINE_RELEASE_POLICY").then(|| "all_at_once".to_string())
    })
    .unwrap_err();
    assert!(err.contains("unknown release policy"));

    let result = PipelineConfig::from_lookup(|key| {
        (key == "PIPELINE_STATION_COUNT").then(|| "0".to_string())
    });
    assert!(result.is_err());
}

#[test]
fn test_tick_interval_duration() {
    let cfg = PipelineConfig::default().with_tick_interval_ms(25);
    assert_eq!(cfg.tick_interval(), std::time::Duration::from_millis(25));
}
