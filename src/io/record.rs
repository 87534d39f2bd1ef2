//! Export the rendered record as JSON.
//!
//! The file round-trips through `--record`, which makes it a convenient
//! starting point for hand-curated entries under the data directory.

use std::fs::{File, create_dir_all};
use std::path::Path;

use crate::domain::LocationRecord;
use crate::error::AppError;

pub fn write_record_json(path: &Path, record: &LocationRecord) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent).map_err(|e| {
            AppError::filesystem(format!("Failed to create dir '{}': {e}", parent.display()))
        })?;
    }

    let file = File::create(path).map_err(|e| {
        AppError::filesystem(format!("Failed to create record JSON '{}': {e}", path.display()))
    })?;

    serde_json::to_writer_pretty(file, record)
        .map_err(|e| AppError::filesystem(format!("Failed to write record JSON: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::file::read_record;
    use crate::data::mock::sample_record;

    #[test]
    fn exported_record_reads_back() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("exports").join("record.json");
        let record = sample_record("88 Harbor Way, Oakland, CA");

        write_record_json(&path, &record).unwrap();
        assert_eq!(read_record(&path).unwrap(), record);
    }
}
