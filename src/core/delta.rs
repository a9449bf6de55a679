use crate::models::DeltaCategory;

const HIGH_PLUS_PLUS_ABOVE: f64 = 20.0;
const HIGH_ABOVE: f64 = 7.0;

/// Buckets a signed delta by magnitude. Boundaries belong to the lower bucket.
pub fn delta_category(delta: f64) -> DeltaCategory {
    let magnitude = delta.abs();
    if magnitude > HIGH_PLUS_PLUS_ABOVE {
        DeltaCategory::HighPlusPlus
    } else if magnitude > HIGH_ABOVE {
        DeltaCategory::High
    } else {
        DeltaCategory::Low
    }
}
