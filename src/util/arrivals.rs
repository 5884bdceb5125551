//! Arrival feed helpers.

use crate::core::{Arrival, Tick};

/// Evenly spaced arrivals: customer `i + 1` arrives at tick `i * spacing`.
#[must_use]
pub fn scripted_arrivals(count: u64, spacing: Tick) -> Vec<Arrival> {
    (0..count)
        .map(|i| Arrival {
            customer_id: i + 1,
            arrival_tick: i * spacing,
        })
        .collect()
}

/// Parse an arrival feed from a JSON array of `{customer_id, arrival_tick}`.
///
/// # Errors
///
/// Returns the serde error message.
pub fn arrivals_from_json(input: &str) -> Result<Vec<Arrival>, String> {
    serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))
}
