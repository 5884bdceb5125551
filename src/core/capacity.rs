//! Slot-limited shared resource ("griddle").
//!
//! Each occupied slot holds the tick at which its unit of work completes.
//! Pending ticks live in a min-heap so the next slot to free up is always at
//! the top.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::core::{PipelineError, Tick};

/// Fixed number of slots with a completion tick per occupied slot.
///
/// Invariants: `occupied == pending.len()` and `occupied <= capacity`.
#[derive(Debug, Clone)]
pub struct CapacityResource {
    capacity: u32,
    occupied: u32,
    /// Min-heap of completion ticks.
    pending: BinaryHeap<Reverse<Tick>>,
}

impl CapacityResource {
    /// Create an empty resource with `capacity` slots.
    ///
    /// A zero capacity is accepted here but rejected by configuration
    /// validation; such a resource is permanently full.
    #[must_use]
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            occupied: 0,
            pending: BinaryHeap::with_capacity(capacity as usize),
        }
    }

    /// Total number of slots.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Slots currently holding a unit of work.
    #[must_use]
    pub const fn occupied(&self) -> u32 {
        self.occupied
    }

    /// Slots available for reservation.
    #[must_use]
    pub const fn free_slots(&self) -> u32 {
        self.capacity - self.occupied
    }

    /// True iff every slot is occupied.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.occupied == self.capacity
    }

    /// Occupy one slot until `completion_tick`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvariantViolation`] when the resource is full.
    /// Callers are expected to wait for space, so this is a logic defect.
    pub fn reserve(&mut self, completion_tick: Tick) -> Result<(), PipelineError> {
        if self.is_full() {
            return Err(PipelineError::InvariantViolation(format!(
                "reserve(tick {completion_tick}) with all {} slots occupied",
                self.capacity
            )));
        }
        self.pending.push(Reverse(completion_tick));
        self.occupied += 1;
        debug_assert_eq!(self.occupied as usize, self.pending.len());
        Ok(())
    }

    /// Earliest pending completion tick, `None` when every slot is free.
    #[must_use]
    pub fn earliest_completion(&self) -> Option<Tick> {
        self.pending.peek().map(|Reverse(tick)| *tick)
    }

    /// Free the earliest slot if its completion tick is `<= now`.
    ///
    /// Frees at most one slot per call even when several are due.
    pub fn release_if_due(&mut self, now: Tick) -> bool {
        match self.pending.peek() {
            Some(Reverse(tick)) if *tick <= now => {
                self.pending.pop();
                self.occupied -= 1;
                debug_assert_eq!(self.occupied as usize, self.pending.len());
                true
            }
            _ => false,
        }
    }

    /// Free every slot whose completion tick is `<= now`; returns the count.
    pub fn release_all_due(&mut self, now: Tick) -> usize {
        let mut released = 0;
        while self.release_if_due(now) {
            released += 1;
        }
        released
    }
}
