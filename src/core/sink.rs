//! Completion sink implementations.
//!
//! The coordinator hands every [`CompletionRecord`] to a sink while still
//! holding its lock, so sinks observe records in admission order.

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;

use crate::core::CompletionRecord;

/// Destination for completion records.
///
/// # Deadlocks
///
/// [`record`](Self::record) runs while the coordinator lock is held. An
/// implementation must not call back into the [`Coordinator`] that owns it
/// (including [`Coordinator::stats`]) and must not block waiting on another
/// actor: the clock actor needs the same lock, so either deadlocks the
/// pipeline. Hand records off to a channel, as [`ChannelCompletionSink`]
/// does, when the consumer is slow.
///
/// [`Coordinator`]: crate::core::Coordinator
/// [`Coordinator::stats`]: crate::core::Coordinator::stats
pub trait CompletionSink: Send {
    /// Record one admission. Must not block or re-enter the coordinator.
    fn record(&mut self, record: CompletionRecord);
}

/// In-memory sink; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCompletionSink {
    records: Arc<Mutex<Vec<CompletionRecord>>>,
}

impl InMemoryCompletionSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records received so far, in admission order.
    #[must_use]
    pub fn records(&self) -> Vec<CompletionRecord> {
        self.records.lock().clone()
    }

    /// Number of records received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl CompletionSink for InMemoryCompletionSink {
    fn record(&mut self, record: CompletionRecord) {
        self.records.lock().push(record);
    }
}

/// Sink that streams records to a receiver on another thread.
pub struct ChannelCompletionSink {
    tx: Sender<CompletionRecord>,
}

impl ChannelCompletionSink {
    /// Create a sink and the receiving end of its channel.
    #[must_use]
    pub fn new() -> (Self, Receiver<CompletionRecord>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }
}

impl CompletionSink for ChannelCompletionSink {
    fn record(&mut self, record: CompletionRecord) {
        if self.tx.send(record).is_err() {
            tracing::warn!(
                customer_id = record.customer_id,
                "completion receiver dropped, record discarded"
            );
        }
    }
}

/// Sink that discards everything; useful when only statistics matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCompletionSink;

impl CompletionSink for NullCompletionSink {
    fn record(&mut self, _record: CompletionRecord) {}
}
