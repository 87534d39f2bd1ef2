//! Run configuration: where reports go and where record files live.
//!
//! Resolution per field is CLI flag, then environment (a `.env` file is read
//! first), then a default next to the running binary.

use std::path::{Path, PathBuf};

pub const OUTPUT_DIR_ENV: &str = "VENDSITE_OUTPUT_DIR";
pub const DATA_DIR_ENV: &str = "VENDSITE_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl Config {
    /// Build from optional CLI overrides plus the process environment.
    pub fn resolve(output_dir: Option<PathBuf>, data_dir: Option<PathBuf>) -> Self {
        dotenvy::dotenv().ok();
        Self::resolve_with(output_dir, data_dir, |key| std::env::var(key).ok(), &exe_dir())
    }

    /// Same as `resolve`, with the environment lookup and base dir injected.
    pub fn resolve_with(
        output_dir: Option<PathBuf>,
        data_dir: Option<PathBuf>,
        env: impl Fn(&str) -> Option<String>,
        base: &Path,
    ) -> Self {
        let from_env = |key: &str| env(key).filter(|v| !v.trim().is_empty()).map(PathBuf::from);

        let output_dir = output_dir
            .or_else(|| from_env(OUTPUT_DIR_ENV))
            .unwrap_or_else(|| base.join("reports"));
        let data_dir = data_dir
            .or_else(|| from_env(DATA_DIR_ENV))
            .unwrap_or_else(|| base.join("..").join("data"));

        Self {
            output_dir,
            data_dir,
        }
    }
}

/// Directory holding the running binary, or `.` if unknown.
fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
