//! Core pipeline abstractions: queues, routing, capacity accounting and the
//! coordinator that synchronizes them.

pub mod capacity;
pub mod coordinator;
pub mod customer;
pub mod error;
pub mod order_queue;
pub mod router;
pub mod sink;
pub mod stats;

pub use capacity::CapacityResource;
pub use coordinator::Coordinator;
pub use customer::{Arrival, CompletionRecord, Customer, CustomerId, Tick};
pub use error::{AppResult, PipelineError};
pub use order_queue::OrderQueue;
pub use router::{select_shortest, RoutingPolicy, ShortestQueue};
pub use sink::{ChannelCompletionSink, CompletionSink, InMemoryCompletionSink, NullCompletionSink};
pub use stats::PipelineStats;
