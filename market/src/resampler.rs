//! Tick-to-OHLCV resampling.
//!
//! Buckets ticks by truncating each timestamp down to the timeframe
//! boundary. Within a bucket, open/close follow time order, high/low are
//! the price extremes, volume is the quantity sum. Buckets that receive
//! no ticks are simply absent from the output (no forward fill).
//!
//! The whole retained history is recomputed on every call. The history is
//! capacity-bounded, so the cost is bounded too; there is no incremental
//! bar state to keep consistent with the tick buffer.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::types::{Bar, Tick, Timeframe};

/// Resample a time-ascending tick slice into OHLCV bars.
///
/// Output is ordered ascending by bucket start.
pub fn resample(ticks: &[Tick], timeframe: Timeframe) -> Vec<Bar> {
    let bucket_ms = timeframe.bucket_ms();
    let mut buckets: BTreeMap<i64, Bar> = BTreeMap::new();

    for tick in ticks {
        let start_ms = tick.ts.timestamp_millis().div_euclid(bucket_ms) * bucket_ms;

        let Some(bucket_start) = DateTime::<Utc>::from_timestamp_millis(start_ms) else {
            continue;
        };

        buckets
            .entry(start_ms)
            .and_modify(|bar| {
                bar.high = bar.high.max(tick.price);
                bar.low = bar.low.min(tick.price);
                bar.close = tick.price;
                bar.volume += tick.qty;
            })
            .or_insert_with(|| Bar {
                bucket_start,
                open: tick.price,
                high: tick.price,
                low: tick.price,
                close: tick.price,
                volume: tick.qty,
            });
    }

    buckets.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(secs: i64, price: f64, qty: f64) -> Tick {
        Tick {
            ts: DateTime::<Utc>::from_timestamp_millis(secs * 1_000).unwrap(),
            symbol: "btcusdt".into(),
            price,
            qty,
        }
    }

    #[test]
    fn one_minute_buckets_follow_time_order() {
        // 00:00:00 -> 100, 00:00:30 -> 110, 00:01:10 -> 90
        let ticks = vec![
            tick(0, 100.0, 1.0),
            tick(30, 110.0, 2.0),
            tick(70, 90.0, 3.0),
        ];

        let bars = resample(&ticks, Timeframe::M1);
        assert_eq!(bars.len(), 2);

        let first = &bars[0];
        assert_eq!(first.bucket_start.timestamp(), 0);
        assert_eq!(first.open, 100.0);
        assert_eq!(first.high, 110.0);
        assert_eq!(first.low, 100.0);
        assert_eq!(first.close, 110.0);
        assert_eq!(first.volume, 3.0);

        let second = &bars[1];
        assert_eq!(second.bucket_start.timestamp(), 60);
        assert_eq!(second.open, 90.0);
        assert_eq!(second.high, 90.0);
        assert_eq!(second.low, 90.0);
        assert_eq!(second.close, 90.0);
        assert_eq!(second.volume, 3.0);
    }

    #[test]
    fn empty_buckets_are_omitted() {
        // Ticks five minutes apart at 1m granularity: gaps stay absent.
        let ticks = vec![tick(0, 100.0, 1.0), tick(300, 105.0, 1.0)];

        let bars = resample(&ticks, Timeframe::M1);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].bucket_start.timestamp(), 0);
        assert_eq!(bars[1].bucket_start.timestamp(), 300);
    }

    #[test]
    fn output_is_ascending_by_bucket_start() {
        let ticks = vec![
            tick(0, 1.0, 1.0),
            tick(61, 2.0, 1.0),
            tick(1, 3.0, 1.0),
            tick(121, 4.0, 1.0),
        ];

        let bars = resample(&ticks, Timeframe::M1);
        let starts: Vec<i64> = bars.iter().map(|b| b.bucket_start.timestamp()).collect();
        assert_eq!(starts, vec![0, 60, 120]);
        // late tick in the first bucket becomes its close
        assert_eq!(bars[0].close, 3.0);
    }

    #[test]
    fn second_granularity_splits_within_a_minute() {
        let ticks = vec![tick(0, 1.0, 1.0), tick(1, 2.0, 1.0), tick(2, 3.0, 1.0)];

        let bars = resample(&ticks, Timeframe::S1);
        assert_eq!(bars.len(), 3);

        let bars = resample(&ticks, Timeframe::M1);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].volume, 3.0);
    }
}
