use serde::{Deserialize, Serialize};

/// Trigger thresholds for the pair alert rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AlertThresholds {
    /// Minimum |z| before the spread counts as diverged.
    pub zscore: f64,
    /// Minimum rolling correlation between the legs.
    pub correlation: f64,
    /// Maximum ADF p-value for the spread to count as stationary.
    pub p_value: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            zscore: 2.0,
            correlation: 0.5,
            p_value: 0.05,
        }
    }
}

/// Stateless alert decision.
///
/// All three signals must be present and pass their threshold, checked
/// in order with short-circuiting: stationarity first, then divergence,
/// then correlation. A missing input means "conditions not met", never
/// an error. The rule keeps no memory of prior evaluations;
/// deduplication of repeated alerts belongs to the caller.
pub fn evaluate(
    zscore: Option<f64>,
    p_value: Option<f64>,
    correlation: Option<f64>,
    thresholds: &AlertThresholds,
) -> bool {
    let (Some(z), Some(p), Some(corr)) = (zscore, p_value, correlation) else {
        return false;
    };

    if p >= thresholds.p_value {
        return false;
    }
    if z.abs() < thresholds.zscore {
        return false;
    }
    if corr < thresholds.correlation {
        return false;
    }

    true
}
