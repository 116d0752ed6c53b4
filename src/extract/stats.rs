//! Extraction statistics and result structures
//!
//! Tracks how many candidate rows a document produced and how many of them
//! survived the arity and header filters.

use crate::models::Runner;

/// Records extracted from one document, with statistics
#[derive(Debug, Clone)]
pub struct ExtractResult {
    /// Successfully built runner records, in document order
    pub runners: Vec<Runner>,

    pub stats: ExtractStats,
}

/// Simple extraction statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExtractStats {
    /// Candidate rows encountered (table rows with values, or non-blank lines)
    pub rows_seen: usize,

    /// Rows turned into records
    pub records_built: usize,

    /// Rows discarded for arity, header or rule reasons
    pub rows_dropped: usize,
}

impl ExtractStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_built(&mut self) {
        self.rows_seen += 1;
        self.records_built += 1;
    }

    pub(crate) fn row_dropped(&mut self) {
        self.rows_seen += 1;
        self.rows_dropped += 1;
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.rows_seen == 0 {
            0.0
        } else {
            (self.records_built as f64 / self.rows_seen as f64) * 100.0
        }
    }
}
