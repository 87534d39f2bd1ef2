//! Location data sources.
//!
//! The pipeline only sees the `LocationSource` trait. Today there is a
//! built-in mock and two flat-file sources; a networked provider would be
//! another implementation behind the same contract.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::{LocationRecord, SourceKind};
use crate::error::AppError;

pub mod file;
pub mod mock;

pub use file::{DirectorySource, RecordFileSource};
pub use mock::MockSource;

/// Anything that can produce a `LocationRecord` for an address.
pub trait LocationSource {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn fetch(&self, address: &str) -> Result<LocationRecord, AppError>;
}

/// Pick the source for this run.
///
/// An explicit record file wins over `kind`.
pub fn build_source(
    kind: SourceKind,
    record: Option<PathBuf>,
    config: &Config,
) -> Box<dyn LocationSource> {
    if let Some(path) = record {
        return Box::new(RecordFileSource::new(path));
    }
    match kind {
        SourceKind::Mock => Box::new(MockSource),
        SourceKind::Dir => Box::new(DirectorySource::new(config.data_dir.clone())),
    }
}
