//! Descriptive statistics over fitness samples.
//!
//! All spreads are population statistics (divide by `n`), matching the
//! objective function and the run aggregation.

/// Arithmetic mean. Returns `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation. Returns `0.0` for an empty slice.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Upper bound on the entries reserved up front for a convergence history.
const MAX_RESERVED_HISTORY: usize = 1 << 16;

/// Empty history buffer for a run of `steps` steps (`steps + 1` entries).
///
/// The reservation saturates and is capped, so huge step counts grow the
/// buffer on demand instead of overflowing.
pub(crate) fn history_buffer(steps: usize) -> Vec<f64> {
    Vec::with_capacity(steps.saturating_add(1).min(MAX_RESERVED_HISTORY))
}

/// Smallest value, or `None` for an empty slice.
pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Element-wise mean of equally long series.
///
/// Series shorter than the first are averaged over the positions they
/// cover. Returns an empty vector when `series` is empty.
pub fn mean_series(series: &[Vec<f64>]) -> Vec<f64> {
    let Some(first) = series.first() else {
        return Vec::new();
    };
    (0..first.len())
        .map(|i| {
            let column: Vec<f64> = series.iter().filter_map(|s| s.get(i).copied()).collect();
            mean(&column)
        })
        .collect()
}
