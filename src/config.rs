use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Journal
    pub journal_file: String,
    pub timezone: Tz,

    // Analysis
    pub oi_percentile: f64,
    pub top_n: usize,
    pub digest_sample: usize,

    // Logging
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal_file: "journal.json".to_string(),
            timezone: Tz::UTC,
            oi_percentile: 75.0,
            top_n: 5,
            digest_sample: 10,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or unparsable values keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        let env = |key: &str, default: &str| -> String {
            lookup(key).unwrap_or_else(|| default.to_string())
        };

        let tz_name = env("JOURNAL_TZ", "UTC");
        let timezone = match tz_name.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                warn!("Unknown timezone {:?}, falling back to UTC", tz_name);
                Tz::UTC
            }
        };

        let oi_percentile = env("OI_PERCENTILE", "75")
            .parse::<f64>()
            .ok()
            .filter(|p| (0.0..=100.0).contains(p))
            .unwrap_or(defaults.oi_percentile);

        Config {
            journal_file: env("JOURNAL_FILE", &defaults.journal_file),
            timezone,
            oi_percentile,
            top_n: env("TOP_N", "5").parse().unwrap_or(defaults.top_n),
            digest_sample: env("DIGEST_SAMPLE", "10")
                .parse()
                .unwrap_or(defaults.digest_sample),
            log_level: env("LOG_LEVEL", &defaults.log_level),
        }
    }
}
