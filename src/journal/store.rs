use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::sessions::session_from_time;
use crate::models::Trade;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("failed to access journal {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse journal {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User-maintained pick lists and groupings kept next to the trades.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub ta_levels: Vec<String>,
    #[serde(default)]
    pub entry_types: Vec<String>,
    #[serde(default)]
    pub strategy_groups: HashMap<String, Vec<String>>,
}

impl Settings {
    /// Strategy names in `group`, or just `[group]` when it is not a group.
    pub fn expand_strategy(&self, group: &str) -> Vec<String> {
        self.strategy_groups
            .get(group)
            .cloned()
            .unwrap_or_else(|| vec![group.to_string()])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    #[serde(default)]
    pub trades: Vec<Trade>,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JournalDocument {
    Full(Journal),
    TradesOnly(Vec<Trade>),
}

/// Parses a journal document. Records without a `session` key get one from
/// their entry hour; an explicit null, `""` or `"N/A"` stays unset.
pub fn parse_journal(content: &str) -> Result<Journal, serde_json::Error> {
    let value: Value = serde_json::from_str(content)?;
    let keyless = trades_without_session(&value);

    let doc: JournalDocument = serde_json::from_value(value)?;
    let mut journal = match doc {
        JournalDocument::Full(journal) => journal,
        JournalDocument::TradesOnly(trades) => Journal {
            trades,
            settings: Settings::default(),
        },
    };

    for (trade, missing) in journal.trades.iter_mut().zip(keyless) {
        if missing {
            trade.session = Some(session_from_time(&trade.timestamp));
        }
    }
    Ok(journal)
}

fn trades_without_session(value: &Value) -> Vec<bool> {
    let trades = match value {
        Value::Array(trades) => trades,
        Value::Object(doc) => match doc.get("trades") {
            Some(Value::Array(trades)) => trades,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    trades.iter().map(|t| t.get("session").is_none()).collect()
}

pub fn load_journal(path: impl AsRef<Path>) -> Result<Journal, JournalError> {
    let path = path.as_ref();
    debug!("Reading journal from {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| JournalError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let journal = parse_journal(&content).map_err(|source| JournalError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "Loaded {} trades ({} TA levels configured) from {}",
        journal.trades.len(),
        journal.settings.ta_levels.len(),
        path.display()
    );
    Ok(journal)
}

pub fn save_journal(path: impl AsRef<Path>, journal: &Journal) -> Result<(), JournalError> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| JournalError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    let json = serde_json::to_string_pretty(journal).map_err(|source| JournalError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(io_err)?;
    debug!("Saved {} trades to {}", journal.trades.len(), path.display());
    Ok(())
}
