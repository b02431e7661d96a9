//! Exchange trade-stream client.
//!
//! One long-lived WebSocket connection per tracked symbol. Every
//! received trade message is normalized and forwarded into an mpsc
//! channel; any read, parse, or connect error tears the connection down
//! and schedules a reconnect after a fixed delay. The delay has no
//! backoff growth and no jitter, and the loop retries indefinitely.

use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use serde_json::Value;
use tokio::sync::mpsc::Sender;
use tokio_tungstenite::connect_async;
use tracing::{info, warn};

use market::types::Tick;

use crate::normalizer::normalize;

pub const DEFAULT_WS_URL: &str = "wss://fstream.binance.com/ws";
pub const DEFAULT_RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Per-symbol trade streaming, mockable for tests.
#[async_trait]
pub trait TradeStreamApi: Send + Sync + 'static {
    /// Stream normalized ticks for one symbol into `sender`.
    ///
    /// Implementations only return once the receiving side goes away.
    async fn run(&self, symbol: String, sender: Sender<Tick>) -> anyhow::Result<()>;
}

/// Binance futures trade-stream client.
pub struct BinanceWsClient {
    base_url: String,
    reconnect_delay: Duration,
}

impl BinanceWsClient {
    pub fn new(base_url: String, reconnect_delay: Duration) -> Self {
        Self {
            base_url,
            reconnect_delay,
        }
    }
}

#[async_trait]
impl TradeStreamApi for BinanceWsClient {
    async fn run(&self, symbol: String, sender: Sender<Tick>) -> anyhow::Result<()> {
        let url = format!("{}/{}@trade", self.base_url, symbol);

        loop {
            match connect_async(url.as_str()).await {
                Ok((ws, _)) => {
                    info!(%symbol, "trade stream connected");
                    let (_write, mut read) = ws.split();

                    while let Some(msg) = read.next().await {
                        let msg = match msg {
                            Ok(m) => m,
                            Err(e) => {
                                warn!(%symbol, error = %e, "trade stream read failed");
                                break;
                            }
                        };

                        if !msg.is_text() {
                            continue;
                        }

                        let raw: Value = match msg.to_text().map(serde_json::from_str) {
                            Ok(Ok(v)) => v,
                            Ok(Err(e)) => {
                                warn!(%symbol, error = %e, "malformed stream message");
                                break;
                            }
                            Err(e) => {
                                warn!(%symbol, error = %e, "non-utf8 stream message");
                                break;
                            }
                        };

                        // Non-trade events fall through silently.
                        if let Some(tick) = normalize(&raw) {
                            if sender.send(tick).await.is_err() {
                                // Receiver dropped: nothing left to feed.
                                return Ok(());
                            }
                        }
                    }

                    warn!(%symbol, "trade stream disconnected");
                }
                Err(e) => warn!(%symbol, error = %e, "trade stream connect failed"),
            }

            info!(
                %symbol,
                delay_ms = self.reconnect_delay.as_millis() as u64,
                "reconnecting trade stream"
            );
            tokio::time::sleep(self.reconnect_delay).await;
        }
    }
}
