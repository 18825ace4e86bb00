//! Aggregation over fetched row sets
//!
//! Sums are plain folds over already-normalized quantities; the only edge
//! handled here is the zero-capacity percentage, which renders as a fixed
//! "Err" marker instead of dividing by zero.

/// Sum a millicore-valued field across all rows.
pub fn sum_cpu<R>(rows: &[R], field: impl Fn(&R) -> u64) -> u64 {
    rows.iter().map(field).sum()
}

/// Sum a byte-valued field across all rows.
pub fn sum_mem<R>(rows: &[R], field: impl Fn(&R) -> u64) -> u64 {
    rows.iter().map(field).sum()
}

/// Percentage of capacity in use, as display text.
///
/// Zero capacity yields "Err"; zero usage against real capacity yields "0%".
pub fn percentage(used: u64, capacity: u64) -> String {
    if used > 0 && capacity > 0 {
        format!("{:.2}%", used as f64 * 100.0 / capacity as f64)
    } else if capacity > 0 {
        "0%".to_string()
    } else {
        "Err".to_string()
    }
}

/// Capacity remaining before requests exceed allocation. Never negative.
pub fn schedulable(requested: u64, allocatable: u64) -> u64 {
    allocatable.saturating_sub(requested)
}

/// Remaining capacity under the stricter of requests and limits.
pub fn free(requested: u64, limited: u64, allocatable: u64) -> u64 {
    allocatable.saturating_sub(requested.max(limited))
}
