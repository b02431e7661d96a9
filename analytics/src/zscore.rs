use market::types::PricePoint;

pub const DEFAULT_WINDOW: usize = 50;

/// Z-score of the latest spread value over its trailing window.
///
/// Uses the sample (n−1) standard deviation. A window with zero or
/// undefined deviation reports `Some(0.0)`, meaning "no divergence"
/// rather than "no data", so a flat spread never blocks downstream
/// consumers. None when the spread is shorter than the window.
pub fn rolling_zscore(spread: &[PricePoint], window: usize) -> Option<f64> {
    if window == 0 || spread.len() < window {
        return None;
    }

    let tail = &spread[spread.len() - window..];
    let n = window as f64;

    let mean = tail.iter().map(|p| p.close).sum::<f64>() / n;
    let variance = tail
        .iter()
        .map(|p| (p.close - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0);
    let std = variance.sqrt();

    if std == 0.0 || std.is_nan() {
        return Some(0.0);
    }

    let last = tail[window - 1].close;
    Some((last - mean) / std)
}
