//! Year dispatcher
//!
//! Maps a race year to its result document and extraction routine. Every
//! way a year can be unavailable (not in the table, half configured, file
//! unreadable) comes back as `None`, never as an error.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::SourceTable;
use crate::extract::{ExtractResult, Extractor};
use crate::models::Runner;

/// Routes year requests to the right extractor
#[derive(Debug, Clone)]
pub struct YearDispatcher {
    sources: SourceTable,
}

impl YearDispatcher {
    pub fn new(sources: SourceTable) -> Self {
        Self { sources }
    }

    /// Configured years, ascending
    pub fn years(&self) -> Vec<u16> {
        self.sources.years().collect()
    }

    /// Records for `year`, or `None` when the year has no usable data source
    pub fn parse(&self, year: u16) -> Option<Vec<Runner>> {
        self.parse_with_stats(year).map(|result| result.runners)
    }

    /// Like [`parse`](Self::parse), keeping the extraction statistics
    pub fn parse_with_stats(&self, year: u16) -> Option<ExtractResult> {
        let Some(entry) = self.sources.get(year) else {
            debug!("Year {} is not configured", year);
            return None;
        };
        let Some((path, format)) = entry.resolve() else {
            warn!("Year {} is only partially configured; treating as unsupported", year);
            return None;
        };

        let content = read_document(path)?;
        let extractor = Extractor::for_format(format);
        debug!(
            "Extracting {} as {:?} with {:?} columns",
            path.display(),
            format.kind,
            extractor.schema()
        );
        let result = extractor.extract(&content);

        info!(
            "Parsed {} runners for {} from {} ({:.1}% of rows)",
            result.runners.len(),
            year,
            path.display(),
            result.stats.success_rate()
        );
        Some(result)
    }
}

/// Read the whole document; bytes that are not UTF-8 are replaced
fn read_document(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            warn!("Cannot read {}: {}", path.display(), e);
            None
        }
    }
}
