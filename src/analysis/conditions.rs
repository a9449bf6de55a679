use std::fmt;
use tracing::debug;

use crate::analysis::level_stats::{analyze_levels, AnalysisResult};
use crate::core::percentile::oi_percentile;
use crate::models::Trade;

pub const HIGH_OI_PERCENTILE: f64 = 75.0;

/// Top TA level among trades matching `predicate`. The predicate receives the
/// 75th-percentile open interest of the whole `trades` list, computed before
/// any filtering.
pub fn best_level_for_condition<P>(trades: &[Trade], predicate: P) -> Option<AnalysisResult>
where
    P: Fn(&Trade, f64) -> bool,
{
    best_level_at_percentile(trades, HIGH_OI_PERCENTILE, predicate)
}

/// Same as [`best_level_for_condition`] with a caller-chosen OI percentile.
pub fn best_level_at_percentile<P>(
    trades: &[Trade],
    percentile: f64,
    predicate: P,
) -> Option<AnalysisResult>
where
    P: Fn(&Trade, f64) -> bool,
{
    if trades.is_empty() {
        return None;
    }
    let threshold = oi_percentile(trades, percentile);
    debug!("OI p{} threshold = {:.2}", percentile, threshold);

    let matching: Vec<&Trade> = trades
        .iter()
        .filter(|&t| predicate(t, threshold))
        .collect();
    if matching.is_empty() {
        return None;
    }

    analyze_levels(matching).into_iter().next()
}

/// Named market conditions used by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// OI at or above the threshold with `High` or `High++` delta.
    HighOiAggressiveDelta,
    /// OI below the threshold with `Low` delta.
    LowOiQuietDelta,
}

impl Condition {
    pub const ALL: [Condition; 2] = [
        Condition::HighOiAggressiveDelta,
        Condition::LowOiQuietDelta,
    ];

    pub fn matches(&self, trade: &Trade, oi_threshold: f64) -> bool {
        let aggressive = trade.delta_category().is_aggressive();
        match self {
            Condition::HighOiAggressiveDelta => trade.oi >= oi_threshold && aggressive,
            Condition::LowOiQuietDelta => trade.oi < oi_threshold && !aggressive,
        }
    }

    pub fn best_level(&self, trades: &[Trade], percentile: f64) -> Option<AnalysisResult> {
        best_level_at_percentile(trades, percentile, |t, threshold| self.matches(t, threshold))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::HighOiAggressiveDelta => write!(f, "High OI + aggressive delta"),
            Condition::LowOiQuietDelta => write!(f, "Low OI + quiet delta"),
        }
    }
}
