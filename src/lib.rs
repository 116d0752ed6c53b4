//! Marathon Stats Library
//!
//! Reads the published finisher lists of a recurring marathon, one document
//! per race year, and summarises them.
//!
//! This library provides tools for:
//! - Extracting runner records from HTML result tables and plain-text dumps
//! - Routing each race year to its document and extraction routine
//! - Computing counts, top cities and age/pace/finish-time tendencies
//! - Rendering a text report and a cross-year CSV export

pub mod aggregate;
pub mod config;
pub mod constants;
pub mod dispatcher;
pub mod error;
pub mod extract;
pub mod models;
pub mod report;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use aggregate::{Aggregator, Report};
pub use config::{AppConfig, SourceTable};
pub use dispatcher::YearDispatcher;
pub use error::{Error, Result};
pub use models::{Runner, RunnerSchema};
