//! Aggregate pipeline statistics.

use serde::{Deserialize, Serialize};

use crate::core::Tick;

/// Point-in-time snapshot of the coordinator, taken under its lock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineStats {
    /// Current simulated tick.
    pub clock: Tick,
    /// Total resource slots.
    pub capacity: u32,
    /// Slots currently occupied.
    pub occupied: u32,
    /// Next tick at which a slot can be freed.
    pub earliest_completion: Option<Tick>,
    /// Waiting customers per station.
    pub queued_per_station: Vec<usize>,
    /// Customers routed to a station so far.
    pub routed: u64,
    /// Customers admitted into the resource so far.
    pub admitted: u64,
    /// Slots freed by clock advances so far.
    pub released: u64,
    /// Admitters currently parked waiting for a free slot.
    pub parked_admitters: usize,
    /// Sum of all fixed wait times.
    pub total_wait: u64,
    /// Longest fixed wait time.
    pub max_wait: Tick,
}

impl PipelineStats {
    /// Customers waiting across all stations.
    #[must_use]
    pub fn queued(&self) -> usize {
        self.queued_per_station.iter().sum()
    }

    /// Mean wait time over admitted customers, `None` before the first admission.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_wait(&self) -> Option<f64> {
        if self.admitted == 0 {
            None
        } else {
            Some(self.total_wait as f64 / self.admitted as f64)
        }
    }
}
