//! Per-station FIFO of waiting customers.

use std::collections::VecDeque;

use crate::core::Customer;

/// FIFO line at one intake station.
///
/// Carries no synchronization of its own; the coordinator owns every queue
/// and only touches them inside its critical section.
#[derive(Debug, Default)]
pub struct OrderQueue {
    line: VecDeque<Customer>,
}

impl OrderQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a customer at the back of the line.
    pub fn push(&mut self, customer: Customer) {
        self.line.push_back(customer);
    }

    /// Put a customer back at the head of the line.
    pub fn push_front(&mut self, customer: Customer) {
        self.line.push_front(customer);
    }

    /// Take the customer at the head of the line, if any.
    pub fn pop_front(&mut self) -> Option<Customer> {
        self.line.pop_front()
    }

    /// Number of waiting customers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.line.len()
    }

    /// Whether nobody is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }
}
