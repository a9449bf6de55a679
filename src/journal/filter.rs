use chrono::NaiveDate;
use tracing::debug;

use crate::models::{Direction, Trade};

/// Criteria the presentation layer narrows the journal with before any
/// aggregation. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradeFilter {
    pub strategies: Vec<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub direction: Option<Direction>,
    pub symbol: Option<String>,
}

impl TradeFilter {
    pub fn matches(&self, trade: &Trade) -> bool {
        if !self.strategies.is_empty()
            && !trade
                .strategy_names
                .iter()
                .any(|s| self.strategies.contains(s))
        {
            return false;
        }

        let day = trade.timestamp.date();
        if self.from.is_some_and(|from| day < from) || self.to.is_some_and(|to| day > to) {
            return false;
        }

        if self.direction.is_some_and(|d| d != trade.direction) {
            return false;
        }

        match &self.symbol {
            Some(sym) => sym.trim().eq_ignore_ascii_case(trade.symbol.trim()),
            None => true,
        }
    }

    /// Matching trades as a new list; `trades` is left untouched.
    pub fn apply(&self, trades: &[Trade]) -> Vec<Trade> {
        let out: Vec<Trade> = trades.iter().filter(|t| self.matches(t)).cloned().collect();
        debug!("Filter kept {} of {} trades", out.len(), trades.len());
        out
    }
}
