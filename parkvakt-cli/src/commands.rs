use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use parkvakt_config::ParkvaktConfig;
use parkvakt_engine::{run_monitor_mode, run_single_pass_mode};
use parkvakt_store::{DaySummary, RecordStore};
use parkvakt_telemetry::metrics::MetricsRecorder;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Monitor all parks until every operating window has closed
    Run(RunArgs),
    /// Run one pass over all parks, then exit (for external schedulers)
    Tick(RunArgs),
    /// Print the daily summary for one park
    Summarize(SummarizeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Configuration file; defaults to config/parkvakt.yaml when present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the day-file directory
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Override seconds between monitoring passes
    #[arg(long)]
    pub interval: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct SummarizeArgs {
    /// Configuration file; defaults to config/parkvakt.yaml when present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the day-file directory
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Park name as configured
    #[arg(short, long)]
    pub park: String,

    /// Calendar date; defaults to today in the park's timezone
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

pub async fn run_monitor(
    args: RunArgs,
    metrics: MetricsRecorder,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = load_with_overrides(&args)?;
    run_monitor_mode(config, metrics).await
}

pub async fn run_single_pass(
    args: RunArgs,
    metrics: MetricsRecorder,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = load_with_overrides(&args)?;
    run_single_pass_mode(config, metrics).await
}

pub async fn run_summarize(
    args: SummarizeArgs,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut config = load_config(args.config.as_ref())?;
    if let Some(data_dir) = args.data_dir {
        config.storage.data_dir = data_dir;
    }

    let park = config
        .park(&args.park)
        .ok_or_else(|| format!("Unknown park: {}", args.park))?;
    let date = match args.date {
        Some(date) => date,
        None => Utc::now().with_timezone(&park.parsed_timezone()?).date_naive(),
    };

    let store = RecordStore::new(config.storage.data_dir.clone());
    match store.summarize(&park.name, date)? {
        DaySummary::Report(report) => println!("{report}"),
        DaySummary::NoFile => println!("{}: no data recorded for {date}", park.name),
        DaySummary::EmptyFile => println!("{}: day-file for {date} has no rows", park.name),
    }
    Ok(())
}

fn load_config(
    path: Option<&PathBuf>,
) -> Result<ParkvaktConfig, Box<dyn std::error::Error + Send + Sync>> {
    let config = match path {
        Some(path) => ParkvaktConfig::load_from_path(path)?,
        None => ParkvaktConfig::load()?,
    };
    Ok(config)
}

fn load_with_overrides(
    args: &RunArgs,
) -> Result<ParkvaktConfig, Box<dyn std::error::Error + Send + Sync>> {
    let mut config = load_config(args.config.as_ref())?;
    if let Some(data_dir) = &args.data_dir {
        config.storage.data_dir = data_dir.clone();
    }
    if let Some(interval) = args.interval {
        config.poll.interval_secs = interval;
    }
    config.revalidate()?;
    info!(
        parks = config.parks.len(),
        data_dir = %config.storage.data_dir.display(),
        "Configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_summarize() {
        let cli = Cli::try_parse_from([
            "parkvakt",
            "summarize",
            "--park",
            "EPCOT",
            "--date",
            "2026-08-08",
        ])
        .unwrap();
        match cli.command {
            Commands::Summarize(args) => {
                assert_eq!(args.park, "EPCOT");
                assert_eq!(
                    args.date,
                    Some(NaiveDate::from_ymd_opt(2026, 8, 8).unwrap())
                );
            }
            _ => panic!("expected summarize"),
        }
    }

    #[test]
    fn test_cli_parses_run_overrides() {
        let cli =
            Cli::try_parse_from(["parkvakt", "run", "--interval", "600", "--data-dir", "/tmp/x"])
                .unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.interval, Some(600));
                assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/x")));
            }
            _ => panic!("expected run"),
        }
    }
}
