//! The report pipeline: fetch -> render -> write.
//!
//! Kept apart from argument handling so tests can drive it with any source
//! and a fixed date.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::config::Config;
use crate::data::LocationSource;
use crate::domain::LocationRecord;
use crate::error::AppError;

/// Outputs of a single run.
#[derive(Debug, Clone)]
pub struct ReportRun {
    pub record: LocationRecord,
    pub path: PathBuf,
}

/// Produce and save the report for `address` as of `date`.
///
/// When `export_record` is set the record JSON is written before the report,
/// and removed again if the report cannot be written, so a failed run leaves
/// neither file behind.
pub fn generate(
    config: &Config,
    source: &dyn LocationSource,
    address: &str,
    date: NaiveDate,
    export_record: Option<&Path>,
) -> Result<ReportRun, AppError> {
    // 1) Location metrics.
    let record = source.fetch(address)?;
    record.validate()?;
    tracing::debug!(source = source.name(), score = record.score(), "fetched location record");

    // 2) Render.
    let document = crate::report::render_report(&record, date);

    // 3) Optional record export.
    if let Some(export) = export_record {
        crate::io::write_record_json(export, &record)?;
        tracing::info!(path = %export.display(), "record exported");
    }

    // 4) Persist. The record's own address names the file.
    let path = match crate::io::write_report(&config.output_dir, &document, &record.address, date) {
        Ok(path) => path,
        Err(err) => {
            if let Some(export) = export_record {
                let _ = std::fs::remove_file(export);
            }
            return Err(err);
        }
    };
    tracing::info!(path = %path.display(), bytes = document.len(), "report written");

    Ok(ReportRun { record, path })
}
