//! Persist rendered reports.
//!
//! Output path: `<output_dir>/report-<sanitized-address>-<YYYYMMDD>.html`.
//! The same address on the same day always maps to the same file, and a
//! rerun overwrites it.

use std::fs::{create_dir_all, write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::AppError;

/// Maximum characters of the address kept in a filename.
pub const MAX_ADDRESS_CHARS: usize = 50;

/// Filename-safe fragment of an address.
///
/// Commas are dropped, spaces and path separators become `-`, and the
/// result is cut to `MAX_ADDRESS_CHARS` characters.
pub fn sanitize_address(address: &str) -> String {
    address
        .chars()
        .filter(|&c| c != ',')
        .map(|c| match c {
            ' ' | '/' | '\\' => '-',
            other => other,
        })
        .take(MAX_ADDRESS_CHARS)
        .collect()
}

pub fn report_filename(address: &str, date: NaiveDate) -> String {
    format!(
        "report-{}-{}.html",
        sanitize_address(address),
        date.format("%Y%m%d")
    )
}

/// Write `document` into `output_dir`, creating the directory if needed.
pub fn write_report(
    output_dir: &Path,
    document: &str,
    address: &str,
    date: NaiveDate,
) -> Result<PathBuf, AppError> {
    create_dir_all(output_dir).map_err(|e| {
        AppError::filesystem(format!(
            "Failed to create output dir '{}': {e}",
            output_dir.display()
        ))
    })?;

    let path = output_dir.join(report_filename(address, date));
    if path.exists() {
        tracing::debug!(path = %path.display(), "overwriting existing report");
    }

    write(&path, document).map_err(|e| {
        AppError::filesystem(format!("Failed to write report '{}': {e}", path.display()))
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn sanitize_strips_commas_and_hyphenates_spaces() {
        assert_eq!(
            sanitize_address("456 Business Park, San Jose, CA"),
            "456-Business-Park-San-Jose-CA"
        );
        assert_eq!(sanitize_address(",,,"), "");
        assert_eq!(sanitize_address("Suite 4/B"), "Suite-4-B");
    }

    #[test]
    fn sanitize_truncates_to_fifty_chars() {
        let long = "1234 Extremely Long Boulevard Name, Unincorporated Township, Some County, CA";
        let out = sanitize_address(long);
        assert_eq!(out.chars().count(), 50);
        assert!(!out.contains(','));
        assert!(!out.contains(' '));
        assert!(long.replace(',', "").replace(' ', "-").starts_with(&out));
    }

    #[test]
    fn sanitize_counts_chars_not_bytes() {
        let address = "é".repeat(60);
        assert_eq!(sanitize_address(&address).chars().count(), 50);
    }

    #[test]
    fn filename_is_deterministic() {
        let a = report_filename("456 Business Park, San Jose, CA", day());
        let b = report_filename("456 Business Park, San Jose, CA", day());
        assert_eq!(a, b);
        assert_eq!(a, "report-456-Business-Park-San-Jose-CA-20261016.html");
    }

    #[test]
    fn rewrite_same_day_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("nested").join("reports");

        let first = write_report(&out, "first", "1 Main St", day()).unwrap();
        let second = write_report(&out, "second", "1 Main St", day()).unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(&second).unwrap(), "second");
        assert_eq!(fs::read_dir(&out).unwrap().count(), 1);
    }

    #[test]
    fn unwritable_output_dir_is_filesystem_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let err = write_report(&blocker.join("reports"), "doc", "1 Main St", day()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Filesystem);
    }
}
