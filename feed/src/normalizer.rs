use chrono::{DateTime, Utc};
use serde_json::Value;

use market::types::Tick;

/// Event type tag carried by exchange trade messages.
pub const TRADE_EVENT: &str = "trade";

/// Map a raw exchange trade message into a canonical [`Tick`].
///
/// Expected shape: `{"e": "trade", "E": <epoch ms>, "s": "BTCUSDT",
/// "p": "29000.1", "q": "0.005"}`. Price and quantity may arrive as
/// strings or numbers.
///
/// Returns None for anything that is not a well-formed trade event:
/// wrong event type, missing fields, unparseable price/qty. Rejected
/// messages are dropped; the caller never sees an error.
pub fn normalize(raw: &Value) -> Option<Tick> {
    if raw.get("e")?.as_str()? != TRADE_EVENT {
        return None;
    }

    let event_time_ms = raw.get("E")?.as_i64()?;
    let ts = DateTime::<Utc>::from_timestamp_millis(event_time_ms)?;
    let symbol = raw.get("s")?.as_str()?.to_lowercase();
    let price = numeric_field(raw.get("p")?)?;
    let qty = numeric_field(raw.get("q")?)?;

    Some(Tick {
        ts,
        symbol,
        price,
        qty,
    })
}

fn numeric_field(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.parse().ok(),
        other => other.as_f64(),
    }
}
