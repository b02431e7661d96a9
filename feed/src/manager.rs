//! FeedManager
//!
//! Wires trade streams into the market store. Responsibilities:
//!   • Spawn one connection task per tracked symbol
//!   • Spawn one ingestion task per symbol, draining a bounded queue
//!   • Keep symbol failures isolated from each other
//!
//! The queue decouples the connection's read loop from `add_tick`: a
//! slow store write backs up the channel instead of the socket, and an
//! ingestion failure is logged and swallowed, never fed back into the
//! connection state machine. A single consumer per symbol preserves
//! per-symbol arrival order; no cross-symbol ordering is promised.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, warn};

use market::store::MarketStore;
use market::types::Tick;

use crate::stream::TradeStreamApi;

pub const DEFAULT_QUEUE_CAPACITY: usize = 1_024;

pub struct FeedManager<C> {
    client: Arc<C>,
    store: Arc<MarketStore>,
    queue_capacity: usize,
}

impl<C: TradeStreamApi> FeedManager<C> {
    pub fn new(client: Arc<C>, store: Arc<MarketStore>, queue_capacity: usize) -> Arc<Self> {
        Arc::new(Self {
            client,
            store,
            queue_capacity,
        })
    }

    /// Start connection and ingestion tasks for every symbol.
    pub fn start(self: &Arc<Self>, symbols: &[String]) {
        for symbol in symbols {
            self.start_symbol(symbol.clone());
        }
    }

    /// Start one symbol's stream → queue → store pipeline.
    pub fn start_symbol(self: &Arc<Self>, symbol: String) {
        let (tx, mut rx) = mpsc::channel::<Tick>(self.queue_capacity);

        let client = Arc::clone(&self.client);
        let stream_symbol = symbol.clone();
        tokio::spawn(async move {
            if let Err(e) = client.run(stream_symbol.clone(), tx).await {
                error!(symbol = %stream_symbol, error = %e, "trade stream task exited");
            }
        });

        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            while let Some(tick) = rx.recv().await {
                if let Err(e) = store.add_tick(tick).await {
                    warn!(symbol = %symbol, error = %e, "tick ingestion failed");
                }
            }
        });
    }
}
