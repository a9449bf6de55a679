use std::fmt::Display;
use std::hash::Hash;

use crate::analysis::conditions::Condition;
use crate::analysis::heatmap::{
    level_delta_heatmap, level_entry_type_heatmap, level_session_heatmap, HeatmapData,
};
use crate::analysis::level_stats::{analyze_levels, analyze_sessions, AnalysisResult};
use crate::analysis::pairs::{analyze_pairs, PairAnalysisResult};
use crate::core::duration::format_duration;
use crate::core::stats::mean;
use crate::models::{DeltaCategory, SessionLabel, Trade};

/// Every aggregate for one trade list, computed once for rendering.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    // Overview
    pub total_trades: usize,
    pub avg_mfe: f64,
    pub avg_mae: f64,
    pub avg_duration_minutes: f64,

    // Tables
    pub levels: Vec<AnalysisResult>,
    pub pairs: Vec<PairAnalysisResult>,
    pub sessions: Vec<AnalysisResult>,

    // Heatmaps
    pub entry_type_heatmap: HeatmapData<String>,
    pub session_heatmap: HeatmapData<SessionLabel>,
    pub delta_heatmap: HeatmapData<DeltaCategory>,

    // Conditional best levels
    pub conditions: Vec<(Condition, Option<AnalysisResult>)>,

    top_n: usize,
}

impl AnalysisReport {
    pub fn from_trades(trades: &[Trade], top_n: usize, oi_percentile: f64) -> Self {
        let mfes: Vec<f64> = trades.iter().map(|t| t.mfe).collect();
        let maes: Vec<f64> = trades.iter().map(|t| t.mae).collect();
        let closed: Vec<f64> = trades
            .iter()
            .filter(|t| t.exit_timestamp.is_some())
            .map(|t| t.duration_minutes())
            .collect();

        AnalysisReport {
            total_trades: trades.len(),
            avg_mfe: mean(&mfes),
            avg_mae: mean(&maes),
            avg_duration_minutes: mean(&closed),
            levels: analyze_levels(trades),
            pairs: analyze_pairs(trades),
            sessions: analyze_sessions(trades),
            entry_type_heatmap: level_entry_type_heatmap(trades),
            session_heatmap: level_session_heatmap(trades),
            delta_heatmap: level_delta_heatmap(trades),
            conditions: Condition::ALL
                .iter()
                .map(|c| (*c, c.best_level(trades, oi_percentile)))
                .collect(),
            top_n,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(70);
        let thin = "  ───────────────────────────────────";

        out.push_str(&format!("\n{}\n  TRADE JOURNAL ANALYSIS\n{}\n", rule, rule));
        out.push_str(&format!("  Trades:      {}\n", self.total_trades));
        if self.total_trades == 0 {
            out.push_str("  No trades match the current filters.\n");
            out.push_str(&format!("{}\n", rule));
            return out;
        }
        out.push_str(&format!("  Avg MFE:     {:.2}%\n", self.avg_mfe));
        out.push_str(&format!("  Avg MAE:     {:.2}%\n", self.avg_mae));
        out.push_str(&format!(
            "  Avg Hold:    {}\n",
            format_duration(self.avg_duration_minutes)
        ));

        out.push_str(&format!("\n  BY TA LEVEL\n{}\n", thin));
        for r in self.levels.iter().take(self.top_n) {
            out.push_str(&format_result_row(r));
        }

        out.push_str(&format!("\n  BY LEVEL PAIR\n{}\n", thin));
        if self.pairs.is_empty() {
            out.push_str("  (no pair seen in 2+ trades)\n");
        }
        for p in self.pairs.iter().take(self.top_n) {
            out.push_str(&format!(
                "  {:>24}: {} trades | MFE {:.2}%\n",
                format!("{} + {}", p.pair.0, p.pair.1),
                p.count,
                p.avg_mfe
            ));
        }

        out.push_str(&format!("\n  BY SESSION\n{}\n", thin));
        for r in &self.sessions {
            out.push_str(&format_result_row(r));
        }

        out.push_str(&render_heatmap("LEVEL x ENTRY TYPE", &self.entry_type_heatmap));
        out.push_str(&render_heatmap("LEVEL x SESSION", &self.session_heatmap));
        out.push_str(&render_heatmap("LEVEL x DELTA", &self.delta_heatmap));

        out.push_str(&format!("\n  CONDITIONAL BEST LEVEL\n{}\n", thin));
        for (condition, best) in &self.conditions {
            match best {
                Some(r) => out.push_str(&format!(
                    "  {}: {} ({} trades | MFE {:.2}%)\n",
                    condition, r.level, r.count, r.avg_mfe
                )),
                None => out.push_str(&format!("  {}: -\n", condition)),
            }
        }

        out.push_str(&format!("{}\n", rule));
        out
    }

    pub fn print_summary(&self) {
        println!("{}", self.render());
    }
}

fn format_result_row(r: &AnalysisResult) -> String {
    format!(
        "  {:>16}: {} trades | MFE {:.2}% (med {:.2}) | MAE {:.2}% (med {:.2}) | score {:+.2}\n",
        r.level, r.count, r.avg_mfe, r.median_mfe, r.avg_mae, r.median_mae, r.score
    )
}

fn render_heatmap<X>(title: &str, heatmap: &HeatmapData<X>) -> String
where
    X: Eq + Hash + Clone + Display,
{
    let mut out = format!("\n  {}\n  ───────────────────────────────────\n", title);
    if heatmap.is_empty() {
        out.push_str("  (no data)\n");
        return out;
    }

    out.push_str(&format!("  {:>16}", ""));
    for x in &heatmap.x_labels {
        out.push_str(&format!(" {:>10}", x.to_string()));
    }
    out.push('\n');

    for y in &heatmap.y_labels {
        out.push_str(&format!("  {:>16}", y));
        for x in &heatmap.x_labels {
            let cell = match heatmap.cell(y, x) {
                Some(c) => format!("{:.1}({})", c.avg_mfe, c.count),
                None => "·".to_string(),
            };
            out.push_str(&format!(" {:>10}", cell));
        }
        out.push('\n');
    }
    out.push_str(&format!("  max avg MFE {:.2}%\n", heatmap.max_mfe));
    out
}
