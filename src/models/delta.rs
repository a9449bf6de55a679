use serde::{Deserialize, Serialize};
use std::fmt;

/// Order-flow delta magnitude bucket. Variant order is the fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DeltaCategory {
    #[serde(rename = "High++")]
    HighPlusPlus,
    High,
    Low,
}

impl DeltaCategory {
    pub const ALL: [DeltaCategory; 3] = [
        DeltaCategory::HighPlusPlus,
        DeltaCategory::High,
        DeltaCategory::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeltaCategory::HighPlusPlus => "High++",
            DeltaCategory::High => "High",
            DeltaCategory::Low => "Low",
        }
    }

    pub fn is_aggressive(&self) -> bool {
        !matches!(self, DeltaCategory::Low)
    }
}

impl fmt::Display for DeltaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
