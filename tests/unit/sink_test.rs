//! Tests for completion sink implementations

use service_pipeline::core::{
    ChannelCompletionSink, CompletionRecord, CompletionSink, Customer, InMemoryCompletionSink,
};

fn make_record(id: u64, arrival: u64, finish: u64) -> CompletionRecord {
    Customer::new(id, arrival).admit(0, finish, 1).unwrap()
}

#[test]
fn test_in_memory_sink_shares_buffer_between_clones() {
    let sink = InMemoryCompletionSink::new();
    let mut writer = sink.clone();
    assert!(sink.is_empty());

    writer.record(make_record(1, 0, 10));
    writer.record(make_record(2, 2, 20));

    assert_eq!(sink.len(), 2);
    let records = sink.records();
    assert_eq!(records[0].customer_id, 1);
    assert_eq!(records[1].wait_time, 19);
}

#[test]
fn test_channel_sink_streams_records() {
    let (mut sink, rx) = ChannelCompletionSink::new();
    sink.record(make_record(5, 0, 10));

    let received = rx.recv().unwrap();
    assert_eq!(received.customer_id, 5);
    assert_eq!(received.wait_time, 11);
}

#[test]
fn test_channel_sink_tolerates_dropped_receiver() {
    let (mut sink, rx) = ChannelCompletionSink::new();
    drop(rx);
    // must not panic
    sink.record(make_record(1, 0, 10));
}
