//! Augmented Dickey-Fuller stationarity test.
//!
//! Regresses the first difference of the spread on its lagged level, a
//! constant, and lagged differences:
//!
//! ```text
//! Δy_t = α + γ·y_{t-1} + Σ φ_j·Δy_{t-j} + ε_t
//! ```
//!
//! The test statistic is the t-ratio of γ. Lag order is selected by AIC
//! over a common sample, searching up to the Schwert cap
//! `12·(n/100)^(1/4)`. The p-value comes from MacKinnon's approximate
//! regression surface for the constant-only case; lower p means stronger
//! evidence that the spread mean-reverts.

use market::types::PricePoint;

use crate::ols;

/// Minimum sample floor before a verdict is reported. Independent of the
/// z-score/correlation window and typically larger, so a pair can carry
/// a valid z-score while still lacking a stationarity verdict.
pub const MIN_OBS: usize = 30;

/// ADF statistic and approximate p-value for the spread series.
///
/// None below [`MIN_OBS`] finite points or when the regression is
/// degenerate.
pub fn adf_test(spread: &[PricePoint]) -> Option<(f64, f64)> {
    let y: Vec<f64> = spread
        .iter()
        .map(|p| p.close)
        .filter(|v| v.is_finite())
        .collect();
    if y.len() < MIN_OBS {
        return None;
    }

    let stat = adf_stat(&y)?;
    if !stat.is_finite() {
        return None;
    }

    Some((stat, mackinnon_p(stat)))
}

fn adf_stat(y: &[f64]) -> Option<f64> {
    let n = y.len();
    let dy: Vec<f64> = y.windows(2).map(|w| w[1] - w[0]).collect();

    // Schwert cap, clamped so the widest regression keeps spare dof
    let schwert = (12.0 * (n as f64 / 100.0).powf(0.25)) as usize;
    let max_lag = schwert.min(n.saturating_sub(8) / 2);

    // AIC lag selection on the common sample (all fits start at max_lag).
    // Degenerate candidates are excluded: a lag whose residuals vanish
    // wins every AIC comparison while its t-ratio is noise.
    let mut best: Option<(f64, usize)> = None;
    for lag in 0..=max_lag {
        let Some(fit) = dickey_fuller_fit(y, &dy, lag, max_lag) else {
            continue;
        };
        if fit.degenerate() {
            continue;
        }
        let aic = fit.aic();
        if best.is_none_or(|(best_aic, _)| aic < best_aic) {
            best = Some((aic, lag));
        }
    }
    let lag = best.map_or(0, |(_, lag)| lag);

    // Refit the chosen lag on its fullest sample
    let fit = dickey_fuller_fit(y, &dy, lag, lag)?;
    Some(fit.coef[1] / fit.stderr[1])
}

/// Fit `Δy_t = α + γ·y_{t-1} + Σ φ_j·Δy_{t-j}` over `t = start..`.
///
/// `start >= lag` so every lagged difference exists.
fn dickey_fuller_fit(y: &[f64], dy: &[f64], lag: usize, start: usize) -> Option<ols::OlsFit> {
    let rows = dy.len().checked_sub(start)?;
    let mut dep = Vec::with_capacity(rows);
    let mut level = Vec::with_capacity(rows);
    let mut diff_lags: Vec<Vec<f64>> = vec![Vec::with_capacity(rows); lag];

    for t in start..dy.len() {
        dep.push(dy[t]);
        level.push(y[t]);
        for j in 1..=lag {
            diff_lags[j - 1].push(dy[t - j]);
        }
    }

    let mut regressors: Vec<&[f64]> = Vec::with_capacity(lag + 1);
    regressors.push(&level);
    for col in &diff_lags {
        regressors.push(col);
    }

    ols::fit(&dep, &regressors)
}

// MacKinnon (1994) approximate asymptotic p-value surface for the
// Dickey-Fuller tau distribution with a constant term.
const TAU_MAX: f64 = 2.74;
const TAU_MIN: f64 = -18.83;
const TAU_STAR: f64 = -1.61;
const TAU_SMALLP: [f64; 3] = [2.1659, 1.4412, 0.038269];
const TAU_LARGEP: [f64; 4] = [1.7339, 0.93202, -0.12745, -0.010368];

fn mackinnon_p(stat: f64) -> f64 {
    if stat > TAU_MAX {
        return 1.0;
    }
    if stat < TAU_MIN {
        return 0.0;
    }

    let z = if stat <= TAU_STAR {
        polyval(&TAU_SMALLP, stat)
    } else {
        polyval(&TAU_LARGEP, stat)
    };

    norm_cdf(z)
}

fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc * x + c)
}

fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

// Abramowitz & Stegun 7.1.26, |error| < 1.5e-7
fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + 0.3275911 * x);
    let poly = t
        * (0.254829592
            + t * (-0.284496736 + t * (1.421413741 + t * (-1.453152027 + t * 1.061405429))));

    sign * (1.0 - poly * (-x * x).exp())
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
                ts: DateTime::<Utc>::from_timestamp_millis(i as i64 * 1_000).unwrap(),
                close,
            })
            .collect()
    }

    /// Strongly mean-reverting series: sign flips every step.
    fn stationary(len: usize) -> Vec<f64> {
        (0..len)
            .map(|t| {
                let base = if t % 2 == 0 { 1.0 } else { -1.0 };
                base + 0.01 * (t as f64 * 1.3).sin()
            })
            .collect()
    }

    /// Trending pseudo-random walk: strictly positive irregular steps.
    fn drifting_walk(len: usize) -> Vec<f64> {
        let mut y = Vec::with_capacity(len);
        let mut level = 100.0;
        for t in 0..len {
            level += 1.0 + 0.9 * (t as f64 * 12.9898).sin();
            y.push(level);
        }
        y
    }

    #[test]
    fn unavailable_below_minimum_sample() {
        let s = series(&stationary(MIN_OBS - 1));
        assert!(adf_test(&s).is_none());
    }

    #[test]
    fn mean_reverting_series_rejects_unit_root() {
        let (stat, p) = adf_test(&series(&stationary(60))).unwrap();
        assert!(stat < -3.43, "stat = {stat}");
        assert!(p < 0.05, "p = {p}");
    }

    #[test]
    fn near_perfect_lagged_fit_does_not_hijack_lag_selection() {
        // sign-flipping spread on a faint trend, the shape an estimated
        // hedge ratio leaves behind: lagged-difference fits explain it
        // almost exactly and must lose the lag choice to the honest
        // lag-0 regression
        let s: Vec<f64> = (0..60)
            .map(|t| {
                let flip = if t % 2 == 0 { 1.0 } else { -1.0 };
                flip + 0.002 * t as f64
            })
            .collect();

        let (stat, p) = adf_test(&series(&s)).unwrap();
        assert!(stat < -2.86, "stat = {stat}");
        assert!(p < 0.05, "p = {p}");
    }

    #[test]
    fn deterministic_spread_reports_unavailable() {
        // exact alternation: every candidate regression fits perfectly,
        // so no finite t-ratio exists and no verdict is reported
        let s: Vec<f64> = (0..60)
            .map(|t| if t % 2 == 0 { 1.0 } else { -1.0 })
            .collect();

        assert!(adf_test(&series(&s)).is_none());
    }

    #[test]
    fn drifting_walk_does_not_reject() {
        let (_, p) = adf_test(&series(&drifting_walk(60))).unwrap();
        assert!(p > 0.05, "p = {p}");
    }

    #[test]
    fn ordering_of_evidence() {
        let (_, p_stationary) = adf_test(&series(&stationary(60))).unwrap();
        let (_, p_walk) = adf_test(&series(&drifting_walk(60))).unwrap();
        assert!(p_stationary < p_walk);
    }

    #[test]
    fn mackinnon_surface_point_values() {
        // reference values from the published surface
        assert!((mackinnon_p(-3.0) - 0.035).abs() < 0.01);
        assert!((mackinnon_p(-1.0) - 0.75).abs() < 0.02);
        assert_eq!(mackinnon_p(5.0), 1.0);
        assert_eq!(mackinnon_p(-25.0), 0.0);
    }

    #[test]
    fn mackinnon_surface_is_monotone() {
        let p4 = mackinnon_p(-4.0);
        let p2 = mackinnon_p(-2.0);
        let p0 = mackinnon_p(0.0);
        assert!(p4 < p2 && p2 < p0);
    }
}
