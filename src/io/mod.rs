//! Input/output helpers.
//!
//! - report file naming + writing (`report`)
//! - record JSON export (`record`)

pub mod record;
pub mod report;

pub use record::*;
pub use report::*;
