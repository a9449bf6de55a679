pub mod conditions;
pub mod digest;
pub mod heatmap;
pub mod level_stats;
pub mod pairs;
pub mod report;

pub use conditions::{best_level_for_condition, Condition};
pub use digest::InsightDigest;
pub use heatmap::{HeatmapCell, HeatmapData};
pub use level_stats::{analyze_levels, analyze_sessions, AnalysisResult};
pub use pairs::{analyze_pairs, PairAnalysisResult};
pub use report::AnalysisReport;

use std::collections::HashMap;
use std::hash::Hash;

/// Buckets keyed by `K`, remembering the order in which keys were first seen.
pub(crate) struct Groups<K, V> {
    index: HashMap<K, usize>,
    buckets: Vec<(K, Vec<V>)>,
}

impl<K: Eq + Hash + Clone, V> Groups<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            buckets: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&i) => self.buckets[i].1.push(value),
            None => {
                self.index.insert(key.clone(), self.buckets.len());
                self.buckets.push((key, vec![value]));
            }
        }
    }

    pub(crate) fn into_buckets(self) -> Vec<(K, Vec<V>)> {
        self.buckets
    }
}
