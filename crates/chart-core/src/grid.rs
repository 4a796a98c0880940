// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers.

/// Slack for float accumulation when deciding whether `end` is reached.
const STRIDE_EPS: f64 = 1e-9;

/// Upper bound on tick positions per axis. Ranges needing more are rejected
/// before any tick list is allocated.
pub const MAX_TICKS: usize = 10_000;

/// Number of positions `stride_through(start, end, step)` yields, or `None`
/// when the inputs are invalid or the count exceeds [`MAX_TICKS`].
pub fn stride_count(start: f64, end: f64, step: f64) -> Option<usize> {
    if !(step.is_finite() && step > 0.0) || !(start.is_finite() && end.is_finite()) || end < start {
        return None;
    }
    let steps = ((end - start) / step + STRIDE_EPS).floor();
    if !steps.is_finite() || steps >= MAX_TICKS as f64 {
        return None;
    }
    Some(steps as usize + 1)
}

/// Values `start, start + step, ...` up to and including `end`.
/// Returns an empty list for a non-positive or non-finite step, or when the
/// range holds more than [`MAX_TICKS`] positions.
pub fn stride_through(start: f64, end: f64, step: f64) -> Vec<f64> {
    match stride_count(start, end, step) {
        Some(count) => (0..count).map(|i| start + step * i as f64).collect(),
        None => Vec::new(),
    }
}

