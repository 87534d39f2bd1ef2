//! Flat-file record sources.
//!
//! Records are plain `LocationRecord` JSON, the same shape written by
//! `--export-record`, so a generated record can be hand-edited and fed back.

use std::fs::File;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::LocationRecord;
use crate::error::AppError;
use crate::io::sanitize_address;

use super::LocationSource;

/// Looks up `<data_dir>/<sanitized-address>.json`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    data_dir: PathBuf,
}

impl DirectorySource {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn record_path(&self, address: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}.json", sanitize_address(address)))
    }
}

impl LocationSource for DirectorySource {
    fn name(&self) -> &'static str {
        "dir"
    }

    fn fetch(&self, address: &str) -> Result<LocationRecord, AppError> {
        let path = self.record_path(address);
        tracing::debug!(path = %path.display(), "looking up location record");
        read_record(&path)
    }
}

/// Loads one explicit record file; the requested address is ignored.
#[derive(Debug, Clone)]
pub struct RecordFileSource {
    path: PathBuf,
}

impl RecordFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl LocationSource for RecordFileSource {
    fn name(&self) -> &'static str {
        "record-file"
    }

    fn fetch(&self, _address: &str) -> Result<LocationRecord, AppError> {
        read_record(&self.path)
    }
}

/// Read and validate a record JSON file.
pub fn read_record(path: &Path) -> Result<LocationRecord, AppError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        IoErrorKind::NotFound => AppError::data_unavailable(format!(
            "No location record at '{}'.",
            path.display()
        )),
        _ => AppError::data_unavailable(format!(
            "Failed to open location record '{}': {e}",
            path.display()
        )),
    })?;

    let record: LocationRecord = serde_json::from_reader(file).map_err(|e| {
        AppError::invalid_record(format!("Invalid location record '{}': {e}", path.display()))
    })?;

    record.validate().map_err(|e| {
        AppError::invalid_record(format!("Invalid location record '{}': {e}", path.display()))
    })?;

    Ok(record)
}
