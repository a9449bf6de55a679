use serde::{Deserialize, Serialize};

use crate::analysis::Groups;
use crate::core::stats::mean;
use crate::models::Trade;

/// Pairs seen in fewer trades than this are dropped.
pub const MIN_PAIR_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairAnalysisResult {
    pub pair: (String, String),
    pub avg_mfe: f64,
    pub count: usize,
}

/// Every unordered pair from a trade's distinct levels, each pair ordered
/// lexicographically so the same two levels always form the same key.
pub fn level_pairs(trade: &Trade) -> Vec<(&str, &str)> {
    let mut levels = trade.active_levels();
    levels.sort_unstable();

    let mut out = Vec::new();
    for (i, first) in levels.iter().enumerate() {
        for second in &levels[i + 1..] {
            out.push((*first, *second));
        }
    }
    out
}

/// Co-occurring TA level pairs with at least [`MIN_PAIR_COUNT`] trades,
/// best average MFE first.
pub fn analyze_pairs(trades: &[Trade]) -> Vec<PairAnalysisResult> {
    let mut groups: Groups<(&str, &str), f64> = Groups::new();
    for t in trades {
        for pair in level_pairs(t) {
            groups.push(pair, t.mfe);
        }
    }

    let mut results: Vec<PairAnalysisResult> = groups
        .into_buckets()
        .into_iter()
        .filter(|(_, mfes)| mfes.len() >= MIN_PAIR_COUNT)
        .map(|((a, b), mfes)| PairAnalysisResult {
            pair: (a.to_string(), b.to_string()),
            avg_mfe: mean(&mfes),
            count: mfes.len(),
        })
        .collect();
    results.sort_by(|a, b| b.avg_mfe.total_cmp(&a.avg_mfe));
    results
}
