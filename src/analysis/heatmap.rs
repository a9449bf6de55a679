use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use crate::models::{DeltaCategory, SessionLabel, Trade};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapCell {
    pub avg_mfe: f64,
    pub count: usize,
}

/// Sparse cross-tab of TA level (y) against a categorical x axis.
/// Cells are keyed by `(y, x)`; combinations with no trades are absent.
#[derive(Debug, Clone)]
pub struct HeatmapData<X> {
    pub x_labels: Vec<X>,
    pub y_labels: Vec<String>,
    pub cells: HashMap<(String, X), HeatmapCell>,
    pub max_mfe: f64,
}

impl<X: Eq + Hash + Clone> HeatmapData<X> {
    pub fn cell(&self, y: &str, x: &X) -> Option<&HeatmapCell> {
        self.cells.get(&(y.to_string(), x.clone()))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Builds a heatmap with distinct active TA levels on the y axis and
/// `x_axis` on the x axis. Trades for which `x_axis` yields `None` are left out.
/// Both label lists come from populated cells only, so a trade with an x value
/// but no active levels adds no column. Labels are ordered by `X`'s `Ord`.
pub fn build_heatmap<X, F>(trades: &[Trade], x_axis: F) -> HeatmapData<X>
where
    X: Ord + Hash + Clone,
    F: Fn(&Trade) -> Option<X>,
{
    let mut totals: HashMap<(String, X), (f64, usize)> = HashMap::new();
    let mut x_labels: BTreeSet<X> = BTreeSet::new();
    let mut y_labels: BTreeSet<String> = BTreeSet::new();

    for t in trades {
        let Some(x) = x_axis(t) else {
            continue;
        };
        for level in t.active_levels() {
            let entry = totals
                .entry((level.to_string(), x.clone()))
                .or_insert((0.0, 0));
            entry.0 += t.mfe;
            entry.1 += 1;
            y_labels.insert(level.to_string());
            x_labels.insert(x.clone());
        }
    }

    let cells: HashMap<(String, X), HeatmapCell> = totals
        .into_iter()
        .map(|(key, (total, count))| {
            (
                key,
                HeatmapCell {
                    avg_mfe: total / count as f64,
                    count,
                },
            )
        })
        .collect();

    let max_mfe = cells
        .values()
        .map(|c| c.avg_mfe)
        .reduce(f64::max)
        .unwrap_or(0.0);

    HeatmapData {
        x_labels: x_labels.into_iter().collect(),
        y_labels: y_labels.into_iter().collect(),
        cells,
        max_mfe,
    }
}

/// TA level x entry type. Trades without an entry type are excluded.
pub fn level_entry_type_heatmap(trades: &[Trade]) -> HeatmapData<String> {
    build_heatmap(trades, |t| t.entry_type().map(str::to_string))
}

/// TA level x session, with unset sessions bucketed as `N/A`.
pub fn level_session_heatmap(trades: &[Trade]) -> HeatmapData<SessionLabel> {
    build_heatmap(trades, |t| Some(t.session_label()))
}

/// TA level x delta category.
pub fn level_delta_heatmap(trades: &[Trade]) -> HeatmapData<DeltaCategory> {
    build_heatmap(trades, |t| Some(t.delta_category()))
}
