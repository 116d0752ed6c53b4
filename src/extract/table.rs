//! Table-markup extractor
//!
//! Turns the rows of an HTML-like results table into [`Runner`] records.
//! Only text sitting directly inside a `<td>` counts as a value: any other
//! start tag (a link, a `<th>`, a `<span>`) suspends capture until the next
//! `<td>`. Rows whose value count differs from the schema arity are dropped.
//!
//! Two boundaries are stricter than a plain flag scan on purpose: `</td>`
//! ends capture, so stray text between cells is never a value, and a new
//! `<tr>` closes a row left open instead of extending it.

use tracing::debug;

use super::markup::{MarkupEvent, MarkupEvents};
use super::stats::{ExtractResult, ExtractStats};
use super::{push_row, schema_for_columns};
use crate::error::Result;
use crate::models::RunnerSchema;

/// Where the scanner is relative to the table structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum RowState {
    #[default]
    OutsideRow,
    InRow,
    InCell,
}

/// Row/cell state machine fed one markup event at a time
#[derive(Debug, Default)]
struct RowScanner {
    state: RowState,
    values: Vec<String>,
}

impl RowScanner {
    /// Advance on `event`; returns the captured values when a row completes
    fn step(&mut self, event: MarkupEvent<'_>) -> Option<Vec<String>> {
        match event {
            MarkupEvent::StartTag(name) => match name.as_str() {
                "td" => {
                    self.state = RowState::InCell;
                    None
                }
                "tr" => {
                    // A new row closes one left open by a missing </tr>
                    let finished = self.take_row();
                    self.state = RowState::InRow;
                    finished
                }
                _ => {
                    if self.state != RowState::OutsideRow {
                        self.state = RowState::InRow;
                    }
                    None
                }
            },
            MarkupEvent::EndTag(name) => match name.as_str() {
                "tr" => {
                    self.state = RowState::OutsideRow;
                    self.take_row()
                }
                "td" if self.state == RowState::InCell => {
                    self.state = RowState::InRow;
                    None
                }
                _ => None,
            },
            MarkupEvent::Text(text) => {
                if self.state == RowState::InCell {
                    let text = text.trim();
                    if !text.is_empty() {
                        self.values.push(text.to_string());
                    }
                }
                None
            }
        }
    }

    fn take_row(&mut self) -> Option<Vec<String>> {
        (!self.values.is_empty()).then(|| std::mem::take(&mut self.values))
    }
}

/// Extractor for HTML-like result tables
#[derive(Debug, Clone)]
pub struct TableExtractor {
    schema: RunnerSchema,
}

impl TableExtractor {
    /// Create an extractor from an explicit column-name list.
    ///
    /// Fails with a configuration error when `columns` is empty or does not
    /// describe a known layout.
    pub fn new<S: AsRef<str>>(columns: &[S]) -> Result<Self> {
        Ok(Self::for_schema(schema_for_columns(columns)?))
    }

    pub fn for_schema(schema: RunnerSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> RunnerSchema {
        self.schema
    }

    /// Extract every well-formed row of `content`
    pub fn extract(&self, content: &str) -> ExtractResult {
        let mut scanner = RowScanner::default();
        let mut runners = Vec::new();
        let mut stats = ExtractStats::new();

        for event in MarkupEvents::new(content) {
            if let Some(values) = scanner.step(event) {
                push_row(self.schema, values, &mut runners, &mut stats);
            }
        }

        debug!(
            "Table extraction: {} records from {} rows ({} dropped)",
            stats.records_built, stats.rows_seen, stats.rows_dropped
        );

        ExtractResult { runners, stats }
    }
}
