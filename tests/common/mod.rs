use chrono::NaiveDateTime;
use trade_journal::core::sessions::session_from_time;
use trade_journal::models::{Direction, Trade};

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

/// Build a trade entered at `entry` carrying `levels`, session derived from
/// the entry hour.
pub fn trade(id: &str, entry: &str, levels: &[&str], mfe: f64, mae: f64) -> Trade {
    let timestamp = ts(entry);
    Trade {
        id: id.to_string(),
        timestamp,
        exit_timestamp: None,
        direction: Direction::Long,
        symbol: "NQ".to_string(),
        market_regime: "Range".to_string(),
        strategy_names: vec!["Opening Drive".to_string()],
        ta_levels: levels.iter().map(|l| Some(l.to_string())).collect(),
        session: Some(session_from_time(&timestamp)),
        delta: 0.0,
        oi: 0.0,
        entry_type: "Limit".to_string(),
        exit_type: "Target".to_string(),
        mfe,
        mae,
        notes: String::new(),
        image_urls: Vec::new(),
    }
}

pub fn unset_session(mut t: Trade) -> Trade {
    t.session = None;
    t
}
