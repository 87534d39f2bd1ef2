//! `vendsite-scout` library crate.
//!
//! The binary (`vendsite`) is a thin wrapper around this library so that:
//!
//! - the fetch/render/write pipeline is testable without spawning processes
//! - new location data sources plug in behind `data::LocationSource`

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
