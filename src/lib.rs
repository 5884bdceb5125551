//! # Service Pipeline
//!
//! A capacity-constrained service pipeline engine.
//!
//! Customers join one of several intake stations and are then admitted into a
//! shared resource with a fixed number of slots. Every admitted unit of work
//! occupies a slot for a fixed number of ticks. The engine computes each
//! customer's wait time and aggregate throughput under contention for those
//! slots.
//!
//! ## Components
//!
//! - **Router** (`core::router`): sends each arrival to the shortest station
//!   line, lowest index on ties.
//! - **`OrderQueue`** (`core::order_queue`): per-station FIFO, unsynchronized.
//! - **`CapacityResource`** (`core::capacity`): slot accounting with a min-heap
//!   of completion ticks.
//! - **Coordinator** (`core::coordinator`): owns queues, resource and clock
//!   under one `parking_lot::Mutex`; admission parks on a `Condvar` while the
//!   resource is full and the clock wakes it when a slot frees up.
//! - **Actors** (`runtime`): a clock actor advancing simulated time at a fixed
//!   cadence and an admission actor running admission passes.
//!
//! ## Example
//!
//! ```rust,no_run
//! use service_pipeline::config::PipelineConfig;
//! use service_pipeline::runtime::Simulation;
//! use service_pipeline::util::scripted_arrivals;
//!
//! let config = PipelineConfig::default()
//!     .with_station_count(3)
//!     .with_resource_capacity(4)
//!     .with_cook_duration(10);
//!
//! let report = Simulation::new(config)?.run(scripted_arrivals(10, 2))?;
//! for record in &report.records {
//!     println!("customer {} waited {}", record.customer_id, record.wait_time);
//! }
//! println!("average wait: {:?}", report.average_wait());
//! # Ok::<(), service_pipeline::core::PipelineError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core pipeline abstractions and capacity accounting.
pub mod core;
/// Configuration models for the pipeline and clock cadence.
pub mod config;
/// Builders to construct coordinators from configuration.
pub mod builders;
/// Runtime adapters: actor threads, tokio clock and the simulation driver.
pub mod runtime;
/// Shared utilities.
pub mod util;
