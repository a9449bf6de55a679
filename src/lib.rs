pub mod analysis;
pub mod cli;
pub mod config;
pub mod core;
pub mod journal;
pub mod models;
#[cfg(test)]
pub mod test_helpers;
