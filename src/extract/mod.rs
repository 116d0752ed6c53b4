//! Extraction of runner records from raw result documents
//!
//! Each year's document is handled by one bounded routine:
//! - [`table`] - HTML-like tables, driven by the [`markup`] event scanner
//! - [`text`] - whitespace-separated and fixed-column text dumps
//! - [`stats`] - per-document extraction statistics
//!
//! Rows that do not fit the configured schema are dropped and counted, never
//! reported as errors.
//!
//! ## Usage
//!
//! ```rust
//! use marathon_stats::extract::TableExtractor;
//! use marathon_stats::models::RunnerSchema;
//!
//! let html = "<table><tr><td>1</td><td>Ann</td><td>Lee</td><td>34</td><td>1</td>\
//!             <td>F</td><td>3:10:05</td><td>7:15</td><td>Memphis</td><td>TN</td>\
//!             <td>101</td></tr></table>";
//! let result = TableExtractor::for_schema(RunnerSchema::Standard).extract(html);
//! assert_eq!(result.runners.len(), 1);
//! assert_eq!(result.runners[0].city, "Memphis");
//! ```

pub mod markup;
pub mod stats;
pub mod table;
pub mod text;

#[cfg(test)]
mod tests;

use tracing::trace;

use crate::error::{Error, Result};
use crate::models::{Runner, RunnerSchema, SourceFormat, SourceKind};

pub use stats::{ExtractResult, ExtractStats};
pub use table::TableExtractor;
pub use text::{FixedColumnExtractor, WhitespaceExtractor};

/// The extraction routine selected for a year
#[derive(Debug, Clone)]
pub enum Extractor {
    Table(TableExtractor),
    Whitespace(WhitespaceExtractor),
    FixedColumn(FixedColumnExtractor),
}

impl Extractor {
    pub fn for_format(format: SourceFormat) -> Self {
        match format.kind {
            SourceKind::Markup => Extractor::Table(TableExtractor::for_schema(format.schema)),
            SourceKind::Whitespace => {
                Extractor::Whitespace(WhitespaceExtractor::for_schema(format.schema))
            }
            SourceKind::FixedColumn => {
                Extractor::FixedColumn(FixedColumnExtractor::for_schema(format.schema))
            }
        }
    }

    pub fn extract(&self, content: &str) -> ExtractResult {
        match self {
            Extractor::Table(e) => e.extract(content),
            Extractor::Whitespace(e) => e.extract(content),
            Extractor::FixedColumn(e) => e.extract(content),
        }
    }

    pub fn schema(&self) -> RunnerSchema {
        match self {
            Extractor::Table(e) => e.schema(),
            Extractor::Whitespace(e) => e.schema(),
            Extractor::FixedColumn(e) => e.schema(),
        }
    }
}

/// Resolve an explicit column list, failing fast on a missing or unknown one
pub(crate) fn schema_for_columns<S: AsRef<str>>(columns: &[S]) -> Result<RunnerSchema> {
    if columns.is_empty() {
        return Err(Error::configuration(
            "Must provide a list of column names for this extractor",
        ));
    }
    RunnerSchema::from_columns(columns).ok_or_else(|| {
        let names: Vec<&str> = columns.iter().map(|c| c.as_ref()).collect();
        Error::configuration(format!("Unrecognised column layout: {}", names.join(", ")))
    })
}

/// Build a record from one row's values, or count the row as dropped
pub(crate) fn push_row(
    schema: RunnerSchema,
    values: Vec<String>,
    runners: &mut Vec<Runner>,
    stats: &mut ExtractStats,
) {
    match Runner::from_values(schema, values) {
        Ok(runner) => {
            runners.push(runner);
            stats.record_built();
        }
        Err(e) => {
            trace!("Dropped row: {}", e);
            stats.row_dropped();
        }
    }
}
