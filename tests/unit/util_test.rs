//! Tests for utility functions

use service_pipeline::core::{select_shortest, Arrival, PipelineStats};
use service_pipeline::util::{init_tracing, scripted_arrivals};

#[test]
fn test_scripted_arrivals_match_every_other_tick() {
    let feed = scripted_arrivals(10, 2);
    assert_eq!(feed.len(), 10);
    assert_eq!(
        feed[9],
        Arrival {
            customer_id: 10,
            arrival_tick: 18
        }
    );
}

#[test]
fn test_router_examples() {
    assert_eq!(select_shortest(&[3, 1, 2]), Some(1));
    assert_eq!(select_shortest(&[2, 2, 5]), Some(0));
}

#[test]
fn test_stats_serialize() {
    let stats = PipelineStats {
        clock: 31,
        admitted: 10,
        total_wait: 200,
        ..PipelineStats::default()
    };
    let json = serde_json::to_string(&stats).unwrap();
    assert!(json.contains("\"clock\":31"));
    assert_eq!(stats.average_wait(), Some(20.0));
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}
