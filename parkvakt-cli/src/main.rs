//! ## parkvakt-cli
//! **Operational interface for the wait-time monitor**
//!
//! ### Expectations:
//! - POSIX-compliant argument parsing
//! - One process instance per data directory (concurrent runs would race
//!   on day-file headers)
//!
//! ### Future:
//! - `backfill` command replaying archived payloads into day-files

use clap::Parser;
use parkvakt_telemetry::logging::EventLogger;
use parkvakt_telemetry::metrics::MetricsRecorder;

mod commands;

use commands::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    EventLogger::init();
    let metrics = MetricsRecorder::new();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => commands::run_monitor(args, metrics).await,
        Commands::Tick(args) => commands::run_single_pass(args, metrics).await,
        Commands::Summarize(args) => commands::run_summarize(args).await,
    }
}
