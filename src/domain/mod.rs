//! Domain types used throughout the pipeline.
//!
//! - the location report record (`LocationRecord`, `Demographics`)
//! - derived classifications (`ScoreTier`, `CompetitionLevel`)
//! - data source selection (`SourceKind`)

pub mod types;

pub use types::*;
