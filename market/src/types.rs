use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("unknown timeframe '{0}' (expected one of: 1s, 1m, 5m)")]
    UnknownTimeframe(String),
}

/// A single normalized trade for one symbol.
///
/// Immutable once produced by the feed normalizer. Timestamps carry
/// millisecond precision in UTC; symbols are always lowercase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub ts: DateTime<Utc>,
    pub symbol: String,
    pub price: f64,
    pub qty: f64,
}

/// Resampling granularity for OHLCV bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeframe {
    S1,
    M1,
    M5,
}

impl Timeframe {
    pub const fn bucket_ms(self) -> i64 {
        match self {
            Timeframe::S1 => 1_000,
            Timeframe::M1 => 60_000,
            Timeframe::M5 => 300_000,
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Timeframe::S1 => "1s",
            Timeframe::M1 => "1m",
            Timeframe::M5 => "5m",
        }
    }
}

impl FromStr for Timeframe {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1s" => Ok(Timeframe::S1),
            "1m" => Ok(Timeframe::M1),
            "5m" => Ok(Timeframe::M5),
            other => Err(MarketError::UnknownTimeframe(other.to_string())),
        }
    }
}

/// One OHLCV bucket for a (symbol, timeframe) pair.
///
/// Derived data: rebuilt from the retained tick history on every
/// resample call, never stored independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub bucket_start: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// One close-price observation of a resampled series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub ts: DateTime<Utc>,
    pub close: f64,
}

/// Close-price projection of a bar series, ordered ascending by time.
pub type PriceSeries = Vec<PricePoint>;
