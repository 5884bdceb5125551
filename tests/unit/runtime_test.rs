//! Tests for the tokio clock task

use std::sync::Arc;
use std::time::Duration;

use service_pipeline::config::PipelineConfig;
use service_pipeline::core::{Coordinator, Customer, InMemoryCompletionSink};
use service_pipeline::runtime::{run_admission_blocking, spawn_clock_task};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_tokio_clock_frees_capacity_for_blocking_admission() {
    let cfg = PipelineConfig::default()
        .with_station_count(1)
        .with_resource_capacity(1)
        .with_cook_duration(3);
    let sink = InMemoryCompletionSink::new();
    let coord = Arc::new(Coordinator::new(cfg, sink.clone()).unwrap());
    for id in 1..=3 {
        coord.route(Customer::new(id, 0)).unwrap();
    }

    let clock = spawn_clock_task(Arc::clone(&coord), Duration::from_millis(1));
    let passes = run_admission_blocking(Arc::clone(&coord)).await.unwrap();
    let ticks = clock.stop().await.unwrap();

    assert_eq!(passes, 3);
    assert!(ticks >= 4);
    assert_eq!(sink.len(), 3);
    assert_eq!(coord.stats().queued(), 0);
}

#[tokio::test]
async fn test_tokio_clock_stops_promptly() {
    let coord = Arc::new(Coordinator::new(PipelineConfig::default(), InMemoryCompletionSink::new()).unwrap());
    let clock = spawn_clock_task(Arc::clone(&coord), Duration::from_secs(3600));
    let ticks = clock.stop().await.unwrap();
    assert_eq!(ticks, 0);
    assert_eq!(coord.clock(), 0);
}
