//! Durable tick log.
//!
//! Append-only sink written alongside each in-memory append. The core
//! never reads it back; on restart the in-memory store starts empty
//! regardless of what the log contains. No transaction spans the
//! in-memory append and the insert here.

use async_trait::async_trait;
use chrono::SecondsFormat;
use sqlx::SqlitePool;
use tokio::sync::Mutex;

use crate::types::Tick;

/// Append-only persistence sink for normalized ticks.
#[async_trait]
pub trait TickLog: Send + Sync + 'static {
    async fn insert(&self, tick: &Tick) -> anyhow::Result<()>;
}

/// SQLite-backed implementation of [`TickLog`].
///
/// Schema is exactly the four normalized tick fields; timestamps are
/// stored as ISO-8601 UTC strings with millisecond precision.
pub struct SqliteTickLog {
    pool: SqlitePool,
}

impl SqliteTickLog {
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect and ensure the ticks table exists.
    pub async fn new(url: &str) -> anyhow::Result<Self> {
        let pool = SqlitePool::connect(url).await?;
        let log = Self { pool };
        log.ensure_schema().await?;
        Ok(log)
    }

    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS ticks (
                ts TEXT NOT NULL,
                symbol TEXT NOT NULL,
                price REAL NOT NULL,
                qty REAL NOT NULL
            );
        "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TickLog for SqliteTickLog {
    async fn insert(&self, tick: &Tick) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO ticks (ts, symbol, price, qty) VALUES (?, ?, ?, ?)")
            .bind(tick.ts.to_rfc3339_opts(SecondsFormat::Millis, true))
            .bind(&tick.symbol)
            .bind(tick.price)
            .bind(tick.qty)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// In-memory [`TickLog`] used by tests and for running without a database.
#[derive(Default)]
pub struct MemoryTickLog {
    ticks: Mutex<Vec<Tick>>,
}

impl MemoryTickLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> Vec<Tick> {
        self.ticks.lock().await.clone()
    }
}

#[async_trait]
impl TickLog for MemoryTickLog {
    async fn insert(&self, tick: &Tick) -> anyhow::Result<()> {
        self.ticks.lock().await.push(tick.clone());
        Ok(())
    }
}
