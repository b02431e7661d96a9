use market::types::PricePoint;

use crate::align::align;

/// Pearson correlation over the trailing window of the aligned series,
/// evaluated at the most recent window position only.
///
/// None when fewer than `window` timestamps align or the value is
/// undefined (either leg has no variance inside the window).
pub fn rolling_correlation(
    series_a: &[PricePoint],
    series_b: &[PricePoint],
    window: usize,
) -> Option<f64> {
    let aligned = align(series_a, series_b);
    if window < 2 || aligned.len() < window {
        return None;
    }

    let a = &aligned.a[aligned.len() - window..];
    let b = &aligned.b[aligned.len() - window..];
    let n = window as f64;

    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for i in 0..window {
        let da = a[i] - mean_a;
        let db = b[i] - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }

    if var_a < 1e-12 || var_b < 1e-12 {
        return None;
    }

    Some(cov / (var_a.sqrt() * var_b.sqrt()))
}
