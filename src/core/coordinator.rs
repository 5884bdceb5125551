//! Coordinator owning the station queues, the shared resource and the clock.
//!
//! Every mutation happens under one `parking_lot::Mutex`. The only blocking
//! wait is in [`Coordinator::admit_one`], which parks on a `Condvar` while the
//! resource is full and is woken by [`Coordinator::advance_clock`] whenever a
//! slot is freed.
//!
//! ```text
//!            reserve (last slot)
//!   HAS_SPACE ------------------> FULL
//!       ^                          |
//!       +--------------------------+
//!         release while full (notify_all)
//! ```

use parking_lot::{Condvar, Mutex};
use tracing::{debug, error, info, trace};

use crate::config::{PipelineConfig, ReleasePolicy};
use crate::core::{
    CapacityResource, CompletionSink, Customer, OrderQueue, PipelineError, PipelineStats,
    RoutingPolicy, ShortestQueue, Tick,
};

/// State guarded by the coordinator lock.
struct PipelineState {
    stations: Vec<OrderQueue>,
    resource: CapacityResource,
    clock: Tick,
    sink: Box<dyn CompletionSink>,
    shutdown: bool,
    parked: usize,
    routed: u64,
    admitted: u64,
    released: u64,
    total_wait: u64,
    max_wait: Tick,
}

/// Synchronized owner of all pipeline state.
///
/// Exactly one admission actor calls [`admit_one`](Self::admit_one) and
/// exactly one clock actor calls [`advance_clock`](Self::advance_clock);
/// arrivals enter through [`route`](Self::route).
pub struct Coordinator<R = ShortestQueue> {
    config: PipelineConfig,
    router: R,
    state: Mutex<PipelineState>,
    /// Signaled when a clock advance frees at least one slot, or on shutdown.
    capacity_freed: Condvar,
}

impl Coordinator<ShortestQueue> {
    /// Create a coordinator routing arrivals to the shortest line.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidConfig`] if the configuration is rejected.
    pub fn new<S>(config: PipelineConfig, sink: S) -> Result<Self, PipelineError>
    where
        S: CompletionSink + 'static,
    {
        Self::with_router(config, ShortestQueue, sink)
    }
}

impl<R: RoutingPolicy> Coordinator<R> {
    /// Create a coordinator with a custom routing policy.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidConfig`] if the configuration is rejected.
    pub fn with_router<S>(config: PipelineConfig, router: R, sink: S) -> Result<Self, PipelineError>
    where
        S: CompletionSink + 'static,
    {
        config.validate().map_err(PipelineError::InvalidConfig)?;

        let stations = (0..config.station_count).map(|_| OrderQueue::new()).collect();
        let state = PipelineState {
            stations,
            resource: CapacityResource::new(config.resource_capacity),
            clock: 0,
            sink: Box::new(sink),
            shutdown: false,
            parked: 0,
            routed: 0,
            admitted: 0,
            released: 0,
            total_wait: 0,
            max_wait: 0,
        };
        info!(
            stations = config.station_count,
            capacity = config.resource_capacity,
            cook_duration = config.cook_duration,
            release_policy = ?config.release_policy,
            "coordinator created"
        );

        Ok(Self {
            config,
            router,
            state: Mutex::new(state),
            capacity_freed: Condvar::new(),
        })
    }

    /// Configuration this coordinator was built with.
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Route an arrival to a station chosen on a consistent snapshot of
    /// queue lengths, and return the station index.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvariantViolation`] if the routing policy
    /// names a station that does not exist.
    pub fn route(&self, customer: Customer) -> Result<usize, PipelineError> {
        let mut state = self.state.lock();
        let lengths: Vec<usize> = state.stations.iter().map(OrderQueue::len).collect();
        let station = self
            .router
            .select(&lengths)
            .filter(|&idx| idx < lengths.len())
            .ok_or_else(|| {
                PipelineError::InvariantViolation(format!(
                    "router selected no valid station among {}",
                    lengths.len()
                ))
            })?;

        debug!(
            customer_id = customer.id(),
            arrival_tick = customer.arrival_tick(),
            station,
            "customer routed"
        );
        state.stations[station].push(customer);
        state.routed += 1;
        Ok(station)
    }

    /// Run one admission pass: visit every station once in index order and
    /// admit its head customer, parking while the resource is full.
    ///
    /// Returns the number of customers admitted. All-empty stations return
    /// `Ok(0)` without blocking.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::ShuttingDown`] if shutdown was requested; a customer
    ///   popped while parked is put back at the head of its station.
    /// - [`PipelineError::InvariantViolation`] if a slot could not be reserved
    ///   after the wait, or the finish tick does not fit in a [`Tick`]; this
    ///   is fatal and the customer is left at the head of its station.
    pub fn admit_one(&self) -> Result<usize, PipelineError> {
        let mut state = self.state.lock();
        if state.shutdown {
            return Err(PipelineError::ShuttingDown);
        }

        let mut admitted = 0;
        for station in 0..state.stations.len() {
            let Some(customer) = state.stations[station].pop_front() else {
                continue;
            };

            if state.resource.is_full() {
                trace!(customer_id = customer.id(), station, "resource full, parking");
                state.parked += 1;
                while state.resource.is_full() && !state.shutdown {
                    self.capacity_freed.wait(&mut state);
                }
                state.parked -= 1;
            }

            if state.shutdown {
                info!(customer_id = customer.id(), station, "admission interrupted by shutdown");
                state.stations[station].push_front(customer);
                return Err(PipelineError::ShuttingDown);
            }

            let start = state
                .resource
                .earliest_completion()
                .unwrap_or(0)
                .max(customer.arrival_tick());
            let handoff_ticks = self.config.handoff_ticks;
            let Some(finish_tick) = start
                .checked_add(self.config.cook_duration)
                .filter(|&finish| customer.wait_time(finish, handoff_ticks).is_some())
            else {
                let err = PipelineError::InvariantViolation(format!(
                    "finish tick for customer {} overflows (start {start}, cook {}, handoff {handoff_ticks})",
                    customer.id(),
                    self.config.cook_duration
                ));
                error!(customer_id = customer.id(), station, error = %err, "tick arithmetic overflow");
                state.stations[station].push_front(customer);
                return Err(err);
            };
            if let Err(e) = state.resource.reserve(finish_tick) {
                error!(customer_id = customer.id(), error = %e, "reserve failed after wait");
                state.stations[station].push_front(customer);
                return Err(e);
            }

            let record = customer.admit(station, finish_tick, handoff_ticks)?;
            state.admitted += 1;
            state.total_wait = state.total_wait.saturating_add(record.wait_time);
            state.max_wait = state.max_wait.max(record.wait_time);
            debug!(
                customer_id = record.customer_id,
                station,
                finish_tick,
                wait_time = record.wait_time,
                occupied = state.resource.occupied(),
                "customer admitted"
            );
            state.sink.record(record);
            admitted += 1;
        }

        Ok(admitted)
    }

    /// Advance simulated time by one tick and free due capacity according to
    /// the configured [`ReleasePolicy`]. Wakes every parked admitter when a
    /// slot was freed; returns whether that happened.
    pub fn advance_clock(&self) -> bool {
        let mut state = self.state.lock();
        state.clock += 1;
        let now = state.clock;

        let released = match self.config.release_policy {
            ReleasePolicy::SinglePerTick => usize::from(state.resource.release_if_due(now)),
            ReleasePolicy::DrainDue => state.resource.release_all_due(now),
        };

        if released == 0 {
            trace!(tick = now, "clock advanced");
            return false;
        }

        state.released += released as u64;
        debug!(
            tick = now,
            released,
            occupied = state.resource.occupied(),
            parked = state.parked,
            "capacity released"
        );
        drop(state);
        self.capacity_freed.notify_all();
        true
    }

    /// Request shutdown and wake every parked admitter. Idempotent.
    pub fn shutdown(&self) {
        let mut state = self.state.lock();
        if state.shutdown {
            return;
        }
        state.shutdown = true;
        let parked = state.parked;
        drop(state);
        self.capacity_freed.notify_all();
        info!(parked, "coordinator shutting down");
    }

    /// Whether [`shutdown`](Self::shutdown) has been called.
    pub fn is_shutdown(&self) -> bool {
        self.state.lock().shutdown
    }

    /// Current simulated tick.
    pub fn clock(&self) -> Tick {
        self.state.lock().clock
    }

    /// Customers waiting across all stations.
    pub fn queued(&self) -> usize {
        self.state.lock().stations.iter().map(OrderQueue::len).sum()
    }

    /// Snapshot of aggregate statistics.
    pub fn stats(&self) -> PipelineStats {
        let state = self.state.lock();
        PipelineStats {
            clock: state.clock,
            capacity: state.resource.capacity(),
            occupied: state.resource.occupied(),
            earliest_completion: state.resource.earliest_completion(),
            queued_per_station: state.stations.iter().map(OrderQueue::len).collect(),
            routed: state.routed,
            admitted: state.admitted,
            released: state.released,
            parked_admitters: state.parked,
            total_wait: state.total_wait,
            max_wait: state.max_wait,
        }
    }
}
