//! Reqstat CLI
//!
//! Aggregate statistics over structured request log files.
//! Counts unique hosts and sums response sizes per host and method.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use reqstat::commands::{execute_stats, validate_args, Mode, StatsArgs};
use reqstat::utils::config::DEFAULT_TOP_COUNT;

/// Reqstat - aggregate statistics over request log files
#[derive(Parser, Debug)]
#[command(name = "reqstat")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the log file
    log_file: PathBuf,

    /// Statistics to compute
    #[arg(value_enum)]
    mode: Mode,

    /// Number of pairs shown by the largest_res_by_host mode
    #[arg(short = 'C', long, default_value_t = DEFAULT_TOP_COUNT)]
    count: usize,

    /// Print the report as JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Write a JSON report to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Create stats args
    let args = StatsArgs {
        log_file: cli.log_file,
        mode: cli.mode,
        count: cli.count,
        json: cli.json,
        output: cli.output,
    };

    // Validate args first
    validate_args(&args)?;

    // Execute stats
    execute_stats(args)?;

    Ok(())
}
