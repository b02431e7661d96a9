use clap::Parser;

use analytics::AlertThresholds;

#[derive(Debug, Parser)]
#[clap(name = "pairwatch", version)]
pub struct Cli {
    /// Symbols to ingest (lowercase, comma-separated)
    #[clap(long, value_delimiter = ',', default_values_t = ["btcusdt".to_string(), "ethusdt".to_string()])]
    pub symbols: Vec<String>,

    /// First leg of the monitored pair
    #[clap(long, default_value = "btcusdt")]
    pub pair_a: String,

    /// Second leg of the monitored pair
    #[clap(long, default_value = "ethusdt")]
    pub pair_b: String,

    /// Resampling granularity: 1s | 1m | 5m
    #[clap(long, default_value = "1m")]
    pub timeframe: String,

    /// Rolling window (bars) for z-score and correlation
    #[clap(long, default_value_t = 50)]
    pub window: usize,

    /// Per-symbol tick retention
    #[clap(long, default_value_t = 10_000)]
    pub max_ticks: usize,

    /// Fixed reconnect delay after a stream failure, in seconds
    #[clap(long, default_value_t = 5)]
    pub reconnect_delay_secs: u64,

    /// Seconds between pair-signal reports
    #[clap(long, default_value_t = 10)]
    pub report_interval_secs: u64,

    /// Minimum |z-score| before an alert can fire
    #[clap(long, default_value_t = 2.0)]
    pub zscore_threshold: f64,

    /// Minimum rolling correlation before an alert can fire
    #[clap(long, default_value_t = 0.5)]
    pub correlation_threshold: f64,

    /// Maximum ADF p-value for the spread to count as stationary
    #[clap(long, default_value_t = 0.05)]
    pub p_value_threshold: f64,
}

impl Cli {
    pub fn thresholds(&self) -> AlertThresholds {
        AlertThresholds {
            zscore: self.zscore_threshold,
            correlation: self.correlation_threshold,
            p_value: self.p_value_threshold,
        }
    }
}
