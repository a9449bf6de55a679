use crate::models::Trade;

/// Nearest-rank percentile over raw values: sort ascending, take index
/// `floor(p / 100 * n)` clamped to the last element. Empty input yields 0.
pub fn nearest_rank(values: &[f64], percentile: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let raw = (percentile / 100.0 * n as f64).floor();
    let idx = if raw.is_nan() || raw < 0.0 {
        0
    } else {
        (raw as usize).min(n - 1)
    };
    sorted[idx]
}

/// Open-interest value at `percentile` across `trades`.
pub fn oi_percentile(trades: &[Trade], percentile: f64) -> f64 {
    let values: Vec<f64> = trades.iter().map(|t| t.oi).collect();
    nearest_rank(&values, percentile)
}
