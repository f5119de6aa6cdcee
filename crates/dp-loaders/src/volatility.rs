//! Rolling volatility over daily closing prices.

/// Number of trailing percent changes the volatility is computed over.
pub const VOLATILITY_WINDOW: usize = 7;

/// Day-over-day percent changes for a chronological series of closes.
///
/// Returns one fewer element than the input. A zero previous close would
/// divide by zero, so such pairs are skipped. Skipping shortens the change
/// series, which lets a trailing window reach one sample further back than
/// a NaN/inf-propagating computation would. Exchange closes are never zero,
/// so this only matters for synthetic input.
pub fn pct_changes(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .filter(|pair| pair[0] != 0.0)
        .map(|pair| (pair[1] - pair[0]) / pair[0])
        .collect()
}

/// Rolling volatility: sample standard deviation of the last `window`
/// percent changes.
///
/// Returns `None` when the series is too short to fill the window. With
/// exactly `window` closes there are only `window - 1` changes, so the
/// series needs at least `window + 1` closes to produce a value.
pub fn rolling_volatility(closes: &[f64], window: usize) -> Option<f64> {
    if window < 2 {
        return None;
    }
    let changes = pct_changes(closes);
    if changes.len() < window {
        return None;
    }
    let tail = &changes[changes.len() - window..];
    Some(sample_std(tail))
}

/// Sample standard deviation (n - 1 denominator).
fn sample_std(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    var.sqrt()
}
