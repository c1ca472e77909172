//! Stats command implementation.
//!
//! The stats command:
//! 1. Loads the log file into lines
//! 2. Runs the selected aggregation mode
//! 3. Renders the result as text or JSON
//! 4. Optionally writes a JSON report file

use crate::aggregator::{
    aggregate_response_sizes, calculate_size_distribution, rank_totals, unique_hosts,
};
use crate::loader::load_lines;
use crate::output::{
    render_aggregate, render_totals, render_unique_hosts, report_to_string, write_report,
};
use crate::parser::schema::StatsReport;
use anyhow::{Context, Result};
use clap::ValueEnum;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Statistics mode selected on the command line
///
/// **Public** - the closed set of supported aggregations. Anything
/// else is rejected at argument parsing time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum Mode {
    /// List the distinct hostnames in the log
    UniqueHosts,

    /// Sum response sizes per host and method pair
    AggResSize,

    /// Show the pairs with the largest summed response sizes
    LargestResByHost,
}

impl Mode {
    /// Mode name as it appears on the command line and in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::UniqueHosts => "unique_hosts",
            Mode::AggResSize => "agg_res_size",
            Mode::LargestResByHost => "largest_res_by_host",
        }
    }
}

/// Arguments for the stats command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct StatsArgs {
    /// Path to the log file
    pub log_file: PathBuf,

    /// Aggregation to run
    pub mode: Mode,

    /// Number of pairs returned by the largest_res_by_host mode
    pub count: usize,

    /// Print the report as JSON instead of plain text
    pub json: bool,

    /// Optional path for a JSON report file
    pub output: Option<PathBuf>,
}

impl Default for StatsArgs {
    fn default() -> Self {
        Self {
            log_file: PathBuf::new(),
            mode: Mode::UniqueHosts,
            count: crate::utils::config::DEFAULT_TOP_COUNT,
            json: false,
            output: None,
        }
    }
}

/// Execute the stats command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Stats command arguments
///
/// # Returns
/// Ok if the statistics were computed and printed, Err with context
/// if any step fails
///
/// # Errors
/// * Log file read errors
/// * Malformed log lines
/// * Report write errors
pub fn execute_stats(args: StatsArgs) -> Result<()> {
    let start_time = Instant::now();

    info!(
        "Computing {} statistics for: {}",
        args.mode.as_str(),
        args.log_file.display()
    );

    // Step 1: Load the log file
    let lines = load_lines(&args.log_file).context("Failed to load log file")?;

    debug!("Loaded {} log lines", lines.len());

    // Step 2: Run the selected aggregation
    let log_file_name = args.log_file.display().to_string();
    let report_base = StatsReport::new(log_file_name, args.mode.as_str());

    let (text, report) = match args.mode {
        Mode::UniqueHosts => {
            let hosts = unique_hosts(&lines).context("Failed to extract hostnames")?;
            let text = render_unique_hosts(&hosts);

            let mut sorted: Vec<String> = hosts.into_iter().collect();
            sorted.sort();

            (text, report_base.with_hosts(sorted))
        }
        Mode::AggResSize => {
            let totals =
                aggregate_response_sizes(&lines).context("Failed to aggregate response sizes")?;

            let dist = calculate_size_distribution(&totals);
            info!("Size distribution: {}", dist.summary());

            let text = render_aggregate(&totals);

            (text, report_base.with_totals(totals.to_totals()))
        }
        Mode::LargestResByHost => {
            let totals =
                aggregate_response_sizes(&lines).context("Failed to aggregate response sizes")?;

            let dist = calculate_size_distribution(&totals);
            info!("Size distribution: {}", dist.summary());

            let ranked = rank_totals(&totals, args.count);

            debug!("Ranked {} of {} host/method pairs", ranked.len(), totals.len());

            let text = render_totals(&ranked);

            (text, report_base.with_totals(ranked))
        }
    };

    // Step 3: Print to stdout
    if args.json {
        let json = report_to_string(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else if !text.is_empty() {
        println!("{}", text);
    }

    // Step 4: Write the report file (if requested)
    if let Some(output_path) = &args.output {
        write_report(&report, output_path).context("Failed to write report JSON")?;

        info!("✓ Report written to: {}", output_path.display());
    }

    let elapsed = start_time.elapsed();
    info!("Statistics completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate stats arguments
///
/// **Public** - can be called before execute_stats for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &StatsArgs) -> Result<()> {
    if args.log_file.as_os_str().is_empty() {
        anyhow::bail!("Log file path cannot be empty");
    }

    if !args.log_file.exists() {
        anyhow::bail!("Log file not found: {}", args.log_file.display());
    }

    Ok(())
}
