use anyhow::Result;
use chrono::Utc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use trade_journal::analysis::{AnalysisReport, InsightDigest};
use trade_journal::cli::{CliArgs, Command};
use trade_journal::config::Config;
use trade_journal::core::sessions::session_at;
use trade_journal::journal::load_journal;

fn main() -> Result<()> {
    let cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let args = CliArgs::parse(std::env::args().skip(1))?;

    if args.command == Command::Session {
        let now = Utc::now();
        println!(
            "{} ({} in {})",
            session_at(now, cfg.timezone),
            now.with_timezone(&cfg.timezone).format("%H:%M"),
            cfg.timezone
        );
        return Ok(());
    }

    let path = args.file.clone().unwrap_or_else(|| cfg.journal_file.clone());
    let journal = load_journal(&path)?;

    let mut filter = args.filter.clone();
    filter.strategies = filter
        .strategies
        .iter()
        .flat_map(|s| journal.settings.expand_strategy(s))
        .collect();
    let trades = filter.apply(&journal.trades);
    if trades.is_empty() {
        warn!("No trades left after filtering {} journal entries", journal.trades.len());
    }

    match args.command {
        Command::Digest => {
            let digest = InsightDigest::build(&trades, cfg.top_n, cfg.digest_sample);
            println!("{}", serde_json::to_string_pretty(&digest)?);
        }
        _ => {
            info!("Analyzing {} trades", trades.len());
            AnalysisReport::from_trades(&trades, cfg.top_n, cfg.oi_percentile).print_summary();
        }
    }

    Ok(())
}
