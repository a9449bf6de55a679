pub mod delta;
pub mod duration;
pub mod percentile;
pub mod sessions;
pub mod stats;
