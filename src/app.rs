//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging and configuration
//! - runs the report pipeline
//! - prints the result summary

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `vendsite` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let address = cli.address();
    let date = report_date(cli.date.as_deref())?;
    let config = Config::resolve(cli.output_dir.clone(), cli.data_dir.clone());
    tracing::debug!(
        output_dir = %config.output_dir.display(),
        data_dir = %config.data_dir.display(),
        "resolved configuration"
    );

    let source = crate::data::build_source(cli.source, cli.record.clone(), &config);

    println!("Generating report for: {address}");
    let run = pipeline::generate(
        &config,
        source.as_ref(),
        &address,
        date,
        cli.export_record.as_deref(),
    )?;

    println!("✓ Report saved to: {}", run.path.display());
    println!(
        "  Score: {}/100 - {}",
        run.record.score(),
        run.record.recommendation()
    );

    Ok(())
}

/// Parse `--date`, defaulting to today in local time.
pub fn report_date(arg: Option<&str>) -> Result<NaiveDate, AppError> {
    match arg {
        None => Ok(Local::now().date_naive()),
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| AppError::usage(format!("Invalid --date '{s}' (expected YYYY-MM-DD): {e}"))),
    }
}

/// Logs go to stderr so stdout keeps only the result lines.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
