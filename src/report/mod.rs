//! Report rendering.
//!
//! Rendering is pure: the same record and date always give the same page.

pub mod format;
pub mod html;

pub use html::render_report;
