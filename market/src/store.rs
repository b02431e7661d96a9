//! MarketStore
//!
//! Central shared market state. Responsibilities:
//!   • Maintain the bounded per-symbol tick history
//!   • Write every accepted tick through to the durable log
//!   • Serve snapshot reads (raw ticks, latest price, symbols)
//!   • Derive OHLCV bars and close-price series on demand
//!
//! MarketStore is designed as an Arc-managed async service so ingestion
//! tasks and request handlers can share it without lifetime issues.
//!
//! Concurrency model: one coarse lock guards the whole symbol map.
//! Atomicity is only promised at single-call granularity; this trades
//! parallelism for simplicity at the tick volumes involved. A sharded
//! per-symbol lock would also be correct as long as per-symbol append
//! order is preserved.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::history::TickHistory;
use crate::log::TickLog;
use crate::resampler::resample;
use crate::types::{Bar, PricePoint, PriceSeries, Tick, Timeframe};

pub struct MarketStore {
    /// Tick histories indexed by lowercase symbol.
    histories: Mutex<HashMap<String, TickHistory>>,

    /// Append-only durable sink, written best-effort alongside each append.
    log: Arc<dyn TickLog>,

    /// Capacity of each per-symbol history.
    max_ticks: usize,
}

impl MarketStore {
    pub fn new(log: Arc<dyn TickLog>, max_ticks: usize) -> Arc<Self> {
        Arc::new(Self {
            histories: Mutex::new(HashMap::new()),
            log,
            max_ticks,
        })
    }

    /// Append a tick to its symbol history and to the durable log.
    ///
    /// The in-memory append happens first, under the store lock; the log
    /// insert follows outside the lock. A crash between the two leaves
    /// them divergent, which is accepted. Errors here are the durable
    /// log's only; the in-memory state is already updated.
    pub async fn add_tick(&self, tick: Tick) -> anyhow::Result<()> {
        {
            let mut histories = self.histories.lock().await;
            histories
                .entry(tick.symbol.clone())
                .or_insert_with(|| TickHistory::new(self.max_ticks))
                .push(tick.clone());
        }

        self.log.insert(&tick).await
    }

    /// Snapshot copy of the retained ticks, empty if the symbol is unknown.
    pub async fn get_ticks(&self, symbol: &str) -> Vec<Tick> {
        let histories = self.histories.lock().await;
        histories
            .get(symbol)
            .map(|h| h.snapshot())
            .unwrap_or_default()
    }

    pub async fn latest_tick(&self, symbol: &str) -> Option<Tick> {
        let histories = self.histories.lock().await;
        histories.get(symbol).and_then(|h| h.latest().cloned())
    }

    pub async fn latest_price(&self, symbol: &str) -> Option<f64> {
        self.latest_tick(symbol).await.map(|t| t.price)
    }

    /// Symbols with at least one observed tick.
    pub async fn symbols(&self) -> Vec<String> {
        let histories = self.histories.lock().await;
        histories.keys().cloned().collect()
    }

    /// OHLCV bars recomputed from the current history snapshot.
    ///
    /// None when the symbol is unknown or has no ticks yet.
    pub async fn resampled(&self, symbol: &str, timeframe: Timeframe) -> Option<Vec<Bar>> {
        let ticks = self.get_ticks(symbol).await;
        if ticks.is_empty() {
            return None;
        }

        Some(resample(&ticks, timeframe))
    }

    /// Close-price projection of [`Self::resampled`].
    pub async fn price_series(&self, symbol: &str, timeframe: Timeframe) -> Option<PriceSeries> {
        let bars = self.resampled(symbol, timeframe).await?;

        Some(
            bars.iter()
                .map(|bar| PricePoint {
                    ts: bar.bucket_start,
                    close: bar.close,
                })
                .collect(),
        )
    }
}
