use serde::{Deserialize, Serialize};

use crate::analysis::level_stats::{analyze_levels, analyze_sessions, AnalysisResult};
use crate::analysis::pairs::{analyze_pairs, PairAnalysisResult};
use crate::core::duration::format_duration;
use crate::models::{Direction, Trade};

/// A trimmed trade handed to a text-insight generator alongside the tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeSample {
    pub symbol: String,
    pub direction: Direction,
    pub levels: Vec<String>,
    pub entry_type: String,
    pub mfe: f64,
    pub mae: f64,
    pub duration: String,
}

impl From<&Trade> for TradeSample {
    fn from(t: &Trade) -> Self {
        TradeSample {
            symbol: t.symbol.clone(),
            direction: t.direction,
            levels: t.active_levels().into_iter().map(str::to_string).collect(),
            entry_type: t.entry_type.clone(),
            mfe: t.mfe,
            mae: t.mae,
            duration: format_duration(t.duration_minutes()),
        }
    }
}

/// Plain-data summary for an external insight generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightDigest {
    pub trade_count: usize,
    pub top_levels: Vec<AnalysisResult>,
    pub top_pairs: Vec<PairAnalysisResult>,
    pub sessions: Vec<AnalysisResult>,
    pub sample: Vec<TradeSample>,
}

impl InsightDigest {
    pub fn build(trades: &[Trade], top_n: usize, sample_size: usize) -> Self {
        let mut top_levels = analyze_levels(trades);
        top_levels.truncate(top_n);
        let mut top_pairs = analyze_pairs(trades);
        top_pairs.truncate(top_n);

        let mut recent: Vec<&Trade> = trades.iter().collect();
        recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        InsightDigest {
            trade_count: trades.len(),
            top_levels,
            top_pairs,
            sessions: analyze_sessions(trades),
            sample: recent
                .into_iter()
                .take(sample_size)
                .map(TradeSample::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{make_trade_with, ts};

    #[test]
    fn truncates_tables_and_samples_recent_trades() {
        let trades = vec![
            make_trade_with(&["A", "B"], 10.0, 1.0, |t| t.timestamp = ts("2024-01-02T09:00:00")),
            make_trade_with(&["A", "B", "C"], 4.0, 1.0, |t| t.timestamp = ts("2024-01-05T09:00:00")),
            make_trade_with(&["C"], 7.0, 1.0, |t| {
                t.timestamp = ts("2024-01-03T09:00:00");
                t.exit_timestamp = Some(ts("2024-01-03T10:05:00"));
            }),
        ];
        let digest = InsightDigest::build(&trades, 2, 2);

        assert_eq!(digest.trade_count, 3);
        assert_eq!(digest.top_levels.len(), 2);
        assert_eq!(digest.top_pairs.len(), 1);
        assert_eq!(digest.sample.len(), 2);
        assert_eq!(digest.sample[0].levels, vec!["A", "B", "C"]);
        assert_eq!(digest.sample[1].duration, "1h 5m");
    }

    #[test]
    fn serializes_camel_case() {
        let trades = vec![make_trade_with(&["A"], 2.0, 1.0, |_| {})];
        let json = serde_json::to_value(InsightDigest::build(&trades, 5, 5)).unwrap();
        assert_eq!(json["tradeCount"], 1);
        assert_eq!(json["topLevels"][0]["avgMfe"], 2.0);
        assert_eq!(json["sessions"][0]["level"], "S1");
    }
}
