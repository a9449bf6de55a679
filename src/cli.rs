use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;

use crate::journal::TradeFilter;
use crate::models::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    #[default]
    Report,
    Digest,
    Session,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    pub command: Command,
    pub file: Option<String>,
    pub filter: TradeFilter,
}

pub const USAGE: &str = "usage: trade-journal [report|digest|session] [--strategy NAME]... \
[--from YYYY-MM-DD] [--to YYYY-MM-DD] [--direction long|short] [--symbol SYM] [--file PATH]";

impl CliArgs {
    /// Parses arguments after the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = CliArgs::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            let mut value = |flag: &str| {
                args.next()
                    .ok_or_else(|| anyhow!("{} needs a value\n{}", flag, USAGE))
            };
            match arg.as_str() {
                "report" => out.command = Command::Report,
                "digest" => out.command = Command::Digest,
                "session" => out.command = Command::Session,
                "--strategy" => out.filter.strategies.push(value("--strategy")?),
                "--from" => out.filter.from = Some(parse_date(&value("--from")?)?),
                "--to" => out.filter.to = Some(parse_date(&value("--to")?)?),
                "--direction" => {
                    let raw = value("--direction")?;
                    out.filter.direction = Some(
                        Direction::from_str_loose(&raw)
                            .ok_or_else(|| anyhow!("unknown direction {:?}", raw))?,
                    );
                }
                "--symbol" => out.filter.symbol = Some(value("--symbol")?),
                "--file" => out.file = Some(value("--file")?),
                other => bail!("unexpected argument {:?}\n{}", other, USAGE),
            }
        }
        Ok(out)
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| anyhow!("bad date {:?}: {}", raw, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_report() {
        let args = CliArgs::parse(Vec::<String>::new()).unwrap();
        assert_eq!(args.command, Command::Report);
        assert_eq!(args.filter, TradeFilter::default());
    }

    #[test]
    fn parses_filters() {
        let args = CliArgs::parse([
            "digest",
            "--strategy",
            "Breakout",
            "--strategy",
            "Fade",
            "--from",
            "2024-01-01",
            "--direction",
            "short",
            "--file",
            "j.json",
        ])
        .unwrap();
        assert_eq!(args.command, Command::Digest);
        assert_eq!(args.filter.strategies, vec!["Breakout", "Fade"]);
        assert_eq!(args.filter.from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(args.filter.direction, Some(Direction::Short));
        assert_eq!(args.file.as_deref(), Some("j.json"));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(CliArgs::parse(["--from", "yesterday"]).is_err());
        assert!(CliArgs::parse(["--symbol"]).is_err());
        assert!(CliArgs::parse(["--direction", "flat"]).is_err());
        assert!(CliArgs::parse(["frobnicate"]).is_err());
    }
}
