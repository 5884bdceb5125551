//! Customers, arrivals and completion records.

use serde::{Deserialize, Serialize};

use crate::core::PipelineError;

/// Discrete unit of simulated time.
pub type Tick = u64;

/// Unique customer identifier.
pub type CustomerId = u64;

/// One entry of the arrival feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrival {
    /// Customer identifier.
    pub customer_id: CustomerId,
    /// Tick at which the customer joins a station.
    pub arrival_tick: Tick,
}

/// A customer waiting at an intake station.
///
/// The wait time is not stored here: admission consumes the customer and
/// produces a [`CompletionRecord`], so the wait is fixed exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    arrival_tick: Tick,
}

impl Customer {
    /// Create a customer arriving at `arrival_tick`.
    #[must_use]
    pub const fn new(id: CustomerId, arrival_tick: Tick) -> Self {
        Self { id, arrival_tick }
    }

    /// Customer identifier.
    #[must_use]
    pub const fn id(&self) -> CustomerId {
        self.id
    }

    /// Tick at which the customer arrived.
    #[must_use]
    pub const fn arrival_tick(&self) -> Tick {
        self.arrival_tick
    }

    /// Wait time this customer would see for a unit finishing at
    /// `finish_tick`, or `None` if the ticks do not fit in a [`Tick`] or the
    /// unit would finish before the customer arrived.
    #[must_use]
    pub const fn wait_time(&self, finish_tick: Tick, handoff_ticks: Tick) -> Option<Tick> {
        match finish_tick.checked_add(handoff_ticks) {
            Some(handed_off) => handed_off.checked_sub(self.arrival_tick),
            None => None,
        }
    }

    /// Consume the customer on admission and fix its wait time.
    ///
    /// `wait_time = finish_tick + handoff_ticks - arrival_tick`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvariantViolation`] if the wait time cannot
    /// be represented; see [`wait_time`](Self::wait_time).
    pub fn admit(
        self,
        station: usize,
        finish_tick: Tick,
        handoff_ticks: Tick,
    ) -> Result<CompletionRecord, PipelineError> {
        let wait_time = self.wait_time(finish_tick, handoff_ticks).ok_or_else(|| {
            PipelineError::InvariantViolation(format!(
                "customer {} arriving at {} cannot finish at {finish_tick} plus {handoff_ticks}",
                self.id, self.arrival_tick
            ))
        })?;
        Ok(CompletionRecord {
            customer_id: self.id,
            station,
            arrival_tick: self.arrival_tick,
            finish_tick,
            wait_time,
        })
    }
}

impl From<Arrival> for Customer {
    fn from(arrival: Arrival) -> Self {
        Self::new(arrival.customer_id, arrival.arrival_tick)
    }
}

/// Externally observable result of one admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Admitted customer.
    pub customer_id: CustomerId,
    /// Station the customer was admitted from.
    pub station: usize,
    /// Tick at which the customer arrived.
    pub arrival_tick: Tick,
    /// Tick at which the customer's unit of work leaves the resource.
    pub finish_tick: Tick,
    /// Ticks between arrival and receiving the finished unit.
    pub wait_time: Tick,
}
