//! Price snapshot helper.
//!
//! Fetches (or synthesizes) a trailing daily price series and writes it as a
//! JSON snapshot the dashboard can open offline. A `.br` output path writes a
//! brotli-compressed snapshot.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use tracing::info;
use unhdash::logging::init_logging;
use unhdash::{
    write_snapshot, DashboardConfig, DateWindow, MarketDataSource, SyntheticSource, YahooChartSource, MAX_LOOKBACK_DAYS,
    TICKER,
};

#[derive(Debug, PartialEq)]
struct Config {
    ticker: String,
    days: i64,
    synthetic: bool,
    seed: u64,
    output_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let dashboard = DashboardConfig::default();
        Config {
            ticker: TICKER.to_string(),
            days: dashboard.lookback_days,
            synthetic: false,
            seed: dashboard.synthetic_seed,
            output_file: None,
        }
    }
}

/// Outcome of argument parsing.
#[derive(Debug, PartialEq)]
enum Command {
    Run(Config),
    Help,
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-ticker" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-ticker requires an argument");
                }
                config.ticker = args[i].trim().to_ascii_uppercase();
            }
            "-days" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-days requires an argument");
                }
                config.days = args[i]
                    .parse()
                    .with_context(|| format!("invalid -days value '{}'", args[i]))?;
                if !(1..=MAX_LOOKBACK_DAYS).contains(&config.days) {
                    anyhow::bail!("-days must be between 1 and {}", MAX_LOOKBACK_DAYS);
                }
            }
            "-synthetic" => {
                config.synthetic = true;
            }
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = args[i]
                    .parse()
                    .with_context(|| format!("invalid -seed value '{}'", args[i]))?;
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                config.output_file = Some(args[i].clone());
            }
            "-h" | "-help" | "--help" => return Ok(Command::Help),
            _ => {
                eprintln!("Warning: Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(Command::Run(config))
}

fn print_help() {
    println!("Price Snapshot Writer");
    println!("Usage: unh-snapshot [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -ticker <SYM>          Ticker to fetch (default: {})", TICKER);
    println!("  -days <N>              Length of the trailing window in days (default: 30)");
    println!("  -synthetic             Generate a seeded random walk instead of fetching");
    println!("  -seed <N>              Seed for -synthetic (default: 42)");
    println!("  -out <FILE>            Output file path (default: <ticker>-snapshot.json)");
    println!("                         A .br suffix writes a brotli-compressed snapshot");
    println!("  -h, -help, --help      Show this help message");
}

fn main() -> Result<()> {
    init_logging("info");

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args)? {
        Command::Run(config) => config,
        Command::Help => {
            print_help();
            return Ok(());
        }
    };

    let source: Box<dyn MarketDataSource> = if config.synthetic {
        Box::new(SyntheticSource::with_seed(config.seed))
    } else {
        let dashboard = DashboardConfig::default();
        Box::new(YahooChartSource::with_endpoint(
            dashboard.endpoint,
            Duration::from_secs(dashboard.request_timeout_secs),
        ))
    };

    let today = chrono::Local::now().date_naive();
    let window = DateWindow::trailing(today, config.days);
    info!(ticker = %config.ticker, %window, source = %source.describe(), "fetching");

    let series = source
        .fetch(&config.ticker, window)
        .with_context(|| format!("failed to fetch {} for {}", config.ticker, window))?;

    let output_path = config
        .output_file
        .clone()
        .unwrap_or_else(|| format!("{}-snapshot.json", config.ticker.to_ascii_lowercase()));
    write_snapshot(&output_path, &series)?;

    println!(
        "Snapshot written to: {} ({} points, {} .. {})",
        output_path,
        series.len(),
        series.first().date,
        series.last().date
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("unh-snapshot")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults() {
        let command = parse_args(&args(&[])).unwrap();
        assert_eq!(command, Command::Run(Config::default()));
    }

    #[test]
    fn test_all_flags() {
        let command = parse_args(&args(&[
            "-ticker", "msft", "-days", "90", "-synthetic", "-seed", "7", "-out", "x.json.br",
        ]))
        .unwrap();

        let Command::Run(config) = command else {
            panic!("expected a run command");
        };
        assert_eq!(config.ticker, "MSFT");
        assert_eq!(config.days, 90);
        assert!(config.synthetic);
        assert_eq!(config.seed, 7);
        assert_eq!(config.output_file.as_deref(), Some("x.json.br"));
    }

    #[test]
    fn test_missing_value_is_an_error() {
        assert!(parse_args(&args(&["-days"])).is_err());
        assert!(parse_args(&args(&["-days", "zero"])).is_err());
        assert!(parse_args(&args(&["-days", "0"])).is_err());
        assert!(parse_args(&args(&["-days", "100000000"])).is_err());
        assert!(parse_args(&args(&["-days", "3650"])).is_ok());
    }

    #[test]
    fn test_help() {
        assert_eq!(parse_args(&args(&["-h"])).unwrap(), Command::Help);
    }
}
