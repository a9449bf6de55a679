use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::delta::delta_category;
use crate::core::duration::trade_duration_minutes;
use crate::models::{DeltaCategory, Direction, Session, SessionLabel};
use crate::models::session::deserialize_optional_session;

/// Maximum number of TA-level slots a journal entry carries.
pub const MAX_TA_LEVEL_SLOTS: usize = 10;

/// A single discretionary trade as logged in the journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    /// Entry time as local wall-clock time.
    pub timestamp: NaiveDateTime,
    #[serde(default)]
    pub exit_timestamp: Option<NaiveDateTime>,
    pub direction: Direction,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub market_regime: String,
    #[serde(default)]
    pub strategy_names: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_level_slots")]
    pub ta_levels: Vec<Option<String>>,
    /// Session as logged. The journal loader fills it from `timestamp` when
    /// the record has no session key at all.
    #[serde(default, deserialize_with = "deserialize_optional_session")]
    pub session: Option<Session>,
    #[serde(default)]
    pub delta: f64,
    #[serde(default)]
    pub oi: f64,
    #[serde(default)]
    pub entry_type: String,
    #[serde(default)]
    pub exit_type: String,
    #[serde(default)]
    pub mfe: f64,
    #[serde(default)]
    pub mae: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl Trade {
    /// Distinct TA levels present on this trade, in slot order.
    pub fn active_levels(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::with_capacity(self.ta_levels.len());
        for level in self.ta_levels.iter().flatten() {
            if !out.contains(&level.as_str()) {
                out.push(level.as_str());
            }
        }
        out
    }

    pub fn session_label(&self) -> SessionLabel {
        SessionLabel::from(self.session)
    }

    pub fn delta_category(&self) -> DeltaCategory {
        delta_category(self.delta)
    }

    pub fn duration_minutes(&self) -> f64 {
        trade_duration_minutes(self.timestamp, self.exit_timestamp)
    }

    /// Entry type, or `None` when the trade was logged without one.
    pub fn entry_type(&self) -> Option<&str> {
        let trimmed = self.entry_type.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(&self.entry_type)
        }
    }
}

/// Normalizes a raw slot value: blank and the legacy `"None"` marker mean unused.
pub fn normalize_level(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "None" {
        None
    } else {
        Some(raw.to_string())
    }
}

fn deserialize_level_slots<'de, D>(deserializer: D) -> Result<Vec<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Option<String>> = Vec::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .take(MAX_TA_LEVEL_SLOTS)
        .map(|slot| slot.as_deref().and_then(normalize_level))
        .collect())
}
