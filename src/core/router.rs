//! Arrival routing across intake stations.

/// Policy choosing the station that receives a new arrival.
///
/// Implementations must be pure: the coordinator calls `select` inside its
/// critical section with a consistent snapshot of queue lengths.
pub trait RoutingPolicy: Send + Sync {
    /// Pick a station index given the current length of every station queue.
    /// Returns `None` only when `lengths` is empty.
    fn select(&self, lengths: &[usize]) -> Option<usize>;
}

/// Route to the shortest line; ties go to the lowest index.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestQueue;

impl RoutingPolicy for ShortestQueue {
    fn select(&self, lengths: &[usize]) -> Option<usize> {
        select_shortest(lengths)
    }
}

/// Index of the strictly smallest length, first one on ties.
#[must_use]
pub fn select_shortest(lengths: &[usize]) -> Option<usize> {
    // min_by_key keeps the first of several equal minima
    lengths
        .iter()
        .enumerate()
        .min_by_key(|&(_, len)| *len)
        .map(|(idx, _)| idx)
}
