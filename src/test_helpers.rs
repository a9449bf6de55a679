use chrono::NaiveDateTime;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::models::{Direction, Session, Trade};

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// Parse a local `YYYY-MM-DDTHH:MM:SS` timestamp.
pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

/// A long BTC trade in session S1 carrying `levels`, with MAE of zero.
pub fn make_trade(levels: &[&str], mfe: f64) -> Trade {
    make_trade_with(levels, mfe, 0.0, |_| {})
}

/// Like [`make_trade`] with an explicit MAE and a hook to adjust other fields.
pub fn make_trade_with(
    levels: &[&str],
    mfe: f64,
    mae: f64,
    adjust: impl FnOnce(&mut Trade),
) -> Trade {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let mut trade = Trade {
        id: format!("t{}", id),
        timestamp: ts("2024-01-15T09:30:00"),
        exit_timestamp: None,
        direction: Direction::Long,
        symbol: "BTC".to_string(),
        market_regime: "Trending".to_string(),
        strategy_names: vec!["Breakout".to_string()],
        ta_levels: levels.iter().map(|l| Some(l.to_string())).collect(),
        session: Some(Session::S1),
        delta: 0.0,
        oi: 0.0,
        entry_type: "Limit".to_string(),
        exit_type: "Target".to_string(),
        mfe,
        mae,
        notes: String::new(),
        image_urls: Vec::new(),
    };
    adjust(&mut trade);
    trade
}
