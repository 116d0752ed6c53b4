//! Plain-text extractors
//!
//! Two readers for text dumps:
//! - [`WhitespaceExtractor`] splits every line on runs of whitespace
//! - [`FixedColumnExtractor`] skips a two-line header block and slices each
//!   line at the column offsets given by the header underline
//!
//! Both run candidate rows through the same [`LineFilter`], so header and
//! rule lines are excluded even when they happen to have the right arity.

use tracing::{debug, trace, warn};

use super::stats::{ExtractResult, ExtractStats};
use super::{push_row, schema_for_columns};
use crate::constants::{FIRST_COLUMN_LABEL, FIXED_HEADER_LINES, RULE_CHARS};
use crate::error::Result;
use crate::models::RunnerSchema;

/// Arity and header/rule exclusion shared by the text readers
#[derive(Debug, Clone)]
struct LineFilter {
    arity: usize,
}

impl LineFilter {
    fn new(schema: RunnerSchema) -> Self {
        Self {
            arity: schema.arity(),
        }
    }

    fn accepts<S: AsRef<str>>(&self, cells: &[S]) -> bool {
        if cells.len() != self.arity {
            return false;
        }
        let Some(first) = cells.first() else {
            return false;
        };
        let first: &str = first.as_ref();
        !first.is_empty()
            && !first.starts_with(RULE_CHARS)
            && !first.eq_ignore_ascii_case(FIRST_COLUMN_LABEL)
    }
}

/// Extractor for whitespace-separated text dumps
#[derive(Debug, Clone)]
pub struct WhitespaceExtractor {
    schema: RunnerSchema,
    filter: LineFilter,
}

impl WhitespaceExtractor {
    /// Create an extractor from an explicit column-name list
    pub fn new<S: AsRef<str>>(columns: &[S]) -> Result<Self> {
        Ok(Self::for_schema(schema_for_columns(columns)?))
    }

    pub fn for_schema(schema: RunnerSchema) -> Self {
        Self {
            schema,
            filter: LineFilter::new(schema),
        }
    }

    pub fn schema(&self) -> RunnerSchema {
        self.schema
    }

    pub fn extract(&self, content: &str) -> ExtractResult {
        let mut runners = Vec::new();
        let mut stats = ExtractStats::new();

        for (line_num, line) in content.lines().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }
            if !self.filter.accepts(&tokens) {
                trace!("Skipped line {}: {} tokens", line_num + 1, tokens.len());
                stats.row_dropped();
                continue;
            }
            let values = tokens.into_iter().map(str::to_string).collect();
            push_row(self.schema, values, &mut runners, &mut stats);
        }

        debug!(
            "Whitespace extraction: {} records from {} lines ({} dropped)",
            stats.records_built, stats.rows_seen, stats.rows_dropped
        );

        ExtractResult { runners, stats }
    }
}

/// Extractor for fixed-column text dumps with a label line and an underline
#[derive(Debug, Clone)]
pub struct FixedColumnExtractor {
    schema: RunnerSchema,
    filter: LineFilter,
    header_lines: usize,
}

impl FixedColumnExtractor {
    /// Create an extractor from an explicit column-name list
    pub fn new<S: AsRef<str>>(columns: &[S]) -> Result<Self> {
        Ok(Self::for_schema(schema_for_columns(columns)?))
    }

    pub fn for_schema(schema: RunnerSchema) -> Self {
        Self {
            schema,
            filter: LineFilter::new(schema),
            header_lines: FIXED_HEADER_LINES,
        }
    }

    pub fn schema(&self) -> RunnerSchema {
        self.schema
    }

    /// Skip the header block by position, then slice each remaining line at
    /// the column starts found in the header's last line.
    pub fn extract(&self, content: &str) -> ExtractResult {
        let mut runners = Vec::new();
        let mut stats = ExtractStats::new();

        let mut lines = content.lines();
        let header: Vec<&str> = lines.by_ref().take(self.header_lines).collect();
        let starts = header.last().map(|rule| column_starts(rule)).unwrap_or_default();

        if starts.len() != self.schema.arity() {
            warn!(
                "Fixed-column header describes {} columns, expected {}",
                starts.len(),
                self.schema.arity()
            );
        }

        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let cells = slice_columns(line, &starts);
            if !self.filter.accepts(&cells) {
                trace!("Skipped fixed-column line: {} cells", cells.len());
                stats.row_dropped();
                continue;
            }
            push_row(self.schema, cells, &mut runners, &mut stats);
        }

        debug!(
            "Fixed-column extraction: {} records from {} lines ({} dropped)",
            stats.records_built, stats.rows_seen, stats.rows_dropped
        );

        ExtractResult { runners, stats }
    }
}

/// Character offsets where each run of non-space characters begins
fn column_starts(underline: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut in_run = false;
    for (i, c) in underline.chars().enumerate() {
        match (c.is_whitespace(), in_run) {
            (false, false) => {
                starts.push(i);
                in_run = true;
            }
            (true, true) => in_run = false,
            _ => {}
        }
    }
    starts
}

/// Cut `line` into cells: each column runs from its start to the next
/// column's start, the last one to end of line. Columns starting past the
/// end of the line are absent, so short lines yield fewer cells.
fn slice_columns(line: &str, starts: &[usize]) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    starts
        .iter()
        .enumerate()
        .take_while(|&(_, &start)| start < chars.len())
        .map(|(i, &start)| {
            let end = starts
                .get(i + 1)
                .map_or(chars.len(), |&next| next.min(chars.len()));
            chars[start..end].iter().collect::<String>().trim().to_string()
        })
        .collect()
}
