use serde::{Deserialize, Serialize};

use crate::analysis::Groups;
use crate::core::stats::{mean, median};
use crate::models::{SessionLabel, Trade};

/// Outcome statistics for one category. `level` holds whatever the grouping
/// axis was (TA level, session label).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub level: String,
    pub avg_mfe: f64,
    pub avg_mae: f64,
    pub median_mfe: f64,
    pub median_mae: f64,
    pub count: usize,
    pub score: f64,
}

impl AnalysisResult {
    pub fn from_trades(label: &str, trades: &[&Trade]) -> Self {
        let mfes: Vec<f64> = trades.iter().map(|t| t.mfe).collect();
        let maes: Vec<f64> = trades.iter().map(|t| t.mae).collect();
        let avg_mfe = mean(&mfes);
        let avg_mae = mean(&maes);

        AnalysisResult {
            level: label.to_string(),
            avg_mfe,
            avg_mae,
            median_mfe: median(&mfes),
            median_mae: median(&maes),
            count: trades.len(),
            score: avg_mfe - avg_mae,
        }
    }
}

/// Per-TA-level statistics, best average MFE first. A trade counts once
/// toward each distinct level it carries.
pub fn analyze_levels<'a, I>(trades: I) -> Vec<AnalysisResult>
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut groups: Groups<&str, &Trade> = Groups::new();
    for t in trades {
        for level in t.active_levels() {
            groups.push(level, t);
        }
    }

    let mut results: Vec<AnalysisResult> = groups
        .into_buckets()
        .into_iter()
        .map(|(level, members)| AnalysisResult::from_trades(level, &members))
        .collect();
    results.sort_by(|a, b| b.avg_mfe.total_cmp(&a.avg_mfe));
    results
}

/// Per-session statistics in fixed session order (`S1`..`IS4`, then `N/A`).
pub fn analyze_sessions(trades: &[Trade]) -> Vec<AnalysisResult> {
    let mut groups: Groups<SessionLabel, &Trade> = Groups::new();
    for t in trades {
        groups.push(t.session_label(), t);
    }

    let mut buckets = groups.into_buckets();
    buckets.sort_by_key(|(label, _)| *label);
    buckets
        .into_iter()
        .map(|(label, members)| AnalysisResult::from_trades(&label.to_string(), &members))
        .collect()
}
