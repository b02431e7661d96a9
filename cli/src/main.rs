pub mod cli;
pub mod config;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};

use analytics::PairSignal;
use cli::Cli;
use config::AppConfig;
use feed::manager::{DEFAULT_QUEUE_CAPACITY, FeedManager};
use feed::stream::BinanceWsClient;
use market::log::SqliteTickLog;
use market::store::MarketStore;
use market::types::Timeframe;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    common::logger::init_logger("pairwatch");

    let config = AppConfig::from_env();
    let timeframe: Timeframe = cli.timeframe.parse()?;
    let thresholds = cli.thresholds();

    let log = Arc::new(SqliteTickLog::new(&config.database_url).await?);
    let store = MarketStore::new(log, cli.max_ticks);

    let client = Arc::new(BinanceWsClient::new(
        config.ws_base_url.clone(),
        Duration::from_secs(cli.reconnect_delay_secs),
    ));
    let manager = FeedManager::new(client, Arc::clone(&store), DEFAULT_QUEUE_CAPACITY);
    manager.start(&cli.symbols);

    info!(
        symbols = ?cli.symbols,
        pair_a = %cli.pair_a,
        pair_b = %cli.pair_b,
        timeframe = timeframe.token(),
        "ingestion started"
    );

    let mut ticker = tokio::time::interval(Duration::from_secs(cli.report_interval_secs));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                report(&store, &cli, timeframe, &thresholds).await;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}

async fn report(
    store: &MarketStore,
    cli: &Cli,
    timeframe: Timeframe,
    thresholds: &analytics::AlertThresholds,
) {
    let series_a = store.price_series(&cli.pair_a, timeframe).await;
    let series_b = store.price_series(&cli.pair_b, timeframe).await;

    let (Some(series_a), Some(series_b)) = (series_a, series_b) else {
        info!(pair_a = %cli.pair_a, pair_b = %cli.pair_b, "waiting for data on both legs");
        return;
    };

    let signal = PairSignal::compute(&series_a, &series_b, cli.window, thresholds);

    if signal.triggered {
        warn!(
            pair_a = %cli.pair_a,
            pair_b = %cli.pair_b,
            zscore = ?signal.zscore,
            correlation = ?signal.correlation,
            p_value = ?signal.p_value,
            hedge_ratio = ?signal.hedge_ratio,
            "pair alert triggered"
        );
    } else {
        info!(
            pair_a = %cli.pair_a,
            pair_b = %cli.pair_b,
            zscore = ?signal.zscore,
            correlation = ?signal.correlation,
            p_value = ?signal.p_value,
            hedge_ratio = ?signal.hedge_ratio,
            "pair signal"
        );
    }
}
