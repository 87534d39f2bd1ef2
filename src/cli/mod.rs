//! Command-line parsing for the location report generator.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::domain::SourceKind;

pub const DEFAULT_ADDRESS: &str = "456 Business Park, San Jose, CA";

#[derive(Debug, Parser)]
#[command(
    name = "vendsite",
    version,
    about = "Generate a vending-placement location report as a standalone HTML page"
)]
pub struct Cli {
    /// Address to analyse; all words are joined with spaces. Options may
    /// appear before or after it; pass `--` first for an address starting
    /// with `-`.
    #[arg(value_name = "ADDRESS")]
    pub address: Vec<String>,

    /// Directory for generated reports.
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory holding per-address record files (used by `--source dir`).
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Where location metrics come from.
    #[arg(long, value_enum, default_value_t = SourceKind::Mock)]
    pub source: SourceKind,

    /// Render a record from this JSON file instead of querying a source.
    #[arg(long, value_name = "JSON")]
    pub record: Option<PathBuf>,

    /// Also write the rendered record as JSON.
    #[arg(long = "export-record", value_name = "JSON")]
    pub export_record: Option<PathBuf>,

    /// Report date (YYYY-MM-DD); defaults to today.
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The address to look up, falling back to the built-in default.
    pub fn address(&self) -> String {
        let joined = self.address.join(" ");
        if joined.trim().is_empty() {
            DEFAULT_ADDRESS.to_string()
        } else {
            joined
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_joined() {
        let cli = Cli::parse_from(["vendsite", "12", "Oak", "Ave,", "Austin,", "TX"]);
        assert_eq!(cli.address(), "12 Oak Ave, Austin, TX");
        assert_eq!(cli.source, SourceKind::Mock);
    }

    #[test]
    fn no_address_uses_default() {
        let cli = Cli::parse_from(["vendsite"]);
        assert_eq!(cli.address(), DEFAULT_ADDRESS);
    }

    #[test]
    fn flags_before_address() {
        let cli = Cli::parse_from(["vendsite", "-o", "out", "--source", "dir", "-vv", "9 Elm St"]);
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.source, SourceKind::Dir);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.address(), "9 Elm St");
    }

    #[test]
    fn flags_after_address() {
        let cli = Cli::parse_from(["vendsite", "1 Main St", "-o", "out", "--date", "2026-10-16"]);
        assert_eq!(cli.address(), "1 Main St");
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.date.as_deref(), Some("2026-10-16"));
    }

    #[test]
    fn double_dash_allows_leading_hyphen() {
        let cli = Cli::parse_from(["vendsite", "--", "-1 Odd Lane"]);
        assert_eq!(cli.address(), "-1 Odd Lane");
    }
}
