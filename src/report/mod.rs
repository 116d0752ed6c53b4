//! Presentation of aggregated statistics
//!
//! - [`text`] - the per-year summary printed to a terminal
//! - [`export`] - the cross-year CSV file
//! - [`format`] - digit grouping shared by both

pub mod export;
pub mod format;
pub mod text;

pub use export::ExportWriter;
pub use text::render_report;
