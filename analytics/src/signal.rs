use serde::Serialize;

use market::types::{PricePoint, PriceSeries};

use crate::adf::adf_test;
use crate::alert::{AlertThresholds, evaluate};
use crate::correlation::rolling_correlation;
use crate::hedge::hedge_ratio;
use crate::spread::spread;
use crate::zscore::rolling_zscore;

/// Snapshot of every pair signal plus the alert decision.
///
/// Computed fresh per request and never persisted. A `None` field means
/// "not enough data yet", which is distinct from a computed zero.
#[derive(Debug, Clone, Serialize)]
pub struct PairSignal {
    pub hedge_ratio: Option<f64>,
    pub spread: Option<PriceSeries>,
    pub zscore: Option<f64>,
    pub correlation: Option<f64>,
    pub adf_stat: Option<f64>,
    pub p_value: Option<f64>,
    pub triggered: bool,
}

impl PairSignal {
    /// Run the full chain: hedge ratio → spread → z-score / correlation /
    /// ADF → alert rule. Absence at any stage flows through unchanged.
    pub fn compute(
        series_a: &[PricePoint],
        series_b: &[PricePoint],
        window: usize,
        thresholds: &AlertThresholds,
    ) -> Self {
        let beta = hedge_ratio(series_a, series_b);
        let spread_series = beta.and_then(|b| spread(series_a, series_b, b));

        let zscore = spread_series
            .as_deref()
            .and_then(|s| rolling_zscore(s, window));
        let correlation = rolling_correlation(series_a, series_b, window);
        let adf = spread_series.as_deref().and_then(adf_test);
        let (adf_stat, p_value) = match adf {
            Some((stat, p)) => (Some(stat), Some(p)),
            None => (None, None),
        };

        let triggered = evaluate(zscore, p_value, correlation, thresholds);

        Self {
            hedge_ratio: beta,
            spread: spread_series,
            zscore,
            correlation,
            adf_stat,
            p_value,
            triggered,
        }
    }
}
