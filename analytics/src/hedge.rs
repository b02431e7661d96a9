use market::types::PricePoint;

use crate::align::align;
use crate::ols;

/// Minimum aligned observations before a hedge ratio is reported.
pub const MIN_OBS: usize = 5;

/// OLS hedge ratio β from `A = α + β·B + ε` on the inner-joined series.
///
/// None when fewer than [`MIN_OBS`] timestamps align or the regression
/// is degenerate (constant B).
pub fn hedge_ratio(series_a: &[PricePoint], series_b: &[PricePoint]) -> Option<f64> {
    let aligned = align(series_a, series_b);
    if aligned.len() < MIN_OBS {
        return None;
    }

    let fit = ols::fit(&aligned.a, &[&aligned.b])?;
    Some(fit.coef[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn series(values: &[f64]) -> Vec<PricePoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint {
                ts: DateTime::<Utc>::from_timestamp_millis(i as i64 * 60_000).unwrap(),
                close,
            })
            .collect()
    }

    #[test]
    fn recovers_beta_of_two_without_noise() {
        // B = 2·A + 1 exactly: regressing B on A gives β = 2
        let a: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64) * 0.3).collect();
        let b: Vec<f64> = a.iter().map(|v| 2.0 * v + 1.0).collect();

        let beta = hedge_ratio(&series(&b), &series(&a)).unwrap();
        assert!((beta - 2.0).abs() < 1e-9);
    }

    #[test]
    fn recovers_beta_with_small_noise() {
        let a: Vec<f64> = (0..200).map(|i| 100.0 + (i as f64) * 0.1).collect();
        let b: Vec<f64> = a
            .iter()
            .enumerate()
            .map(|(i, v)| 2.0 * v + 0.001 * ((i as f64) * 12.9898).sin())
            .collect();

        let beta = hedge_ratio(&series(&b), &series(&a)).unwrap();
        assert!((beta - 2.0).abs() < 1e-3);
    }

    #[test]
    fn unavailable_below_min_obs() {
        let a = series(&[1.0, 2.0, 3.0, 4.0]);
        let b = series(&[2.0, 4.0, 6.0, 8.0]);

        assert!(hedge_ratio(&a, &b).is_none());
    }

    #[test]
    fn unavailable_when_nothing_aligns() {
        let a = series(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let mut b = series(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        for p in &mut b {
            p.ts = p.ts + chrono::Duration::milliseconds(1);
        }

        assert!(hedge_ratio(&a, &b).is_none());
    }

    #[test]
    fn unavailable_for_constant_b() {
        let a = series(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = series(&[7.0; 6]);

        assert!(hedge_ratio(&a, &b).is_none());
    }
}
