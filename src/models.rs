//! Core record types for race results.
//!
//! Every extractor produces [`Runner`] records. Fields are kept as the raw
//! text found in the source document; numeric interpretation happens only
//! in the aggregator.

use crate::constants::{CLOCK_TIME_COLUMNS, STANDARD_COLUMNS};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Column layouts found across result years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunnerSchema {
    /// Eleven columns: place through bib number
    Standard,
    /// Twelve columns: standard layout plus clock time
    WithClockTime,
}

impl RunnerSchema {
    /// Ordered column names for this layout
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            RunnerSchema::Standard => STANDARD_COLUMNS,
            RunnerSchema::WithClockTime => CLOCK_TIME_COLUMNS,
        }
    }

    /// Number of values a row must carry
    pub fn arity(&self) -> usize {
        self.columns().len()
    }

    /// Match an explicit column-name list to a known layout
    pub fn from_columns<S: AsRef<str>>(columns: &[S]) -> Option<Self> {
        [RunnerSchema::Standard, RunnerSchema::WithClockTime]
            .into_iter()
            .find(|schema| {
                let known = schema.columns();
                known.len() == columns.len()
                    && known
                        .iter()
                        .zip(columns)
                        .all(|(k, c)| k.eq_ignore_ascii_case(c.as_ref().trim()))
            })
    }
}

/// Physical layout of a year's result document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// HTML-like document with one results table
    Markup,
    /// Plain text, fields separated by runs of whitespace
    Whitespace,
    /// Plain text with a label line and an underline, read by column offsets
    FixedColumn,
}

/// Extraction routine for one year: document layout plus column schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFormat {
    pub kind: SourceKind,
    pub schema: RunnerSchema,
}

impl SourceFormat {
    pub fn new(kind: SourceKind, schema: RunnerSchema) -> Self {
        Self { kind, schema }
    }
}

/// One finisher row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Runner {
    pub place: String,
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub sex_place: String,
    pub sex: String,
    pub time: String,
    pub pace: String,
    pub city: String,
    pub state: String,
    pub bib: String,
    /// Present only for [`RunnerSchema::WithClockTime`] rows
    pub clock_time: Option<String>,
}

impl Runner {
    /// Build a record by assigning `values` to the schema's columns in order.
    ///
    /// Fails with [`Error::RowShape`] when the value count differs from the
    /// schema arity; extractors drop such rows.
    pub fn from_values(schema: RunnerSchema, values: Vec<String>) -> Result<Self> {
        match schema {
            RunnerSchema::Standard => {
                let [
                    place,
                    first_name,
                    last_name,
                    age,
                    sex_place,
                    sex,
                    time,
                    pace,
                    city,
                    state,
                    bib,
                ]: [String; 11] = values
                    .try_into()
                    .map_err(|v: Vec<String>| Error::row_shape(schema.arity(), v.len()))?;
                Ok(Self {
                    place,
                    first_name,
                    last_name,
                    age,
                    sex_place,
                    sex,
                    time,
                    pace,
                    city,
                    state,
                    bib,
                    clock_time: None,
                })
            }
            RunnerSchema::WithClockTime => {
                let [
                    place,
                    first_name,
                    last_name,
                    age,
                    sex_place,
                    sex,
                    time,
                    pace,
                    city,
                    state,
                    bib,
                    clock_time,
                ]: [String; 12] = values
                    .try_into()
                    .map_err(|v: Vec<String>| Error::row_shape(schema.arity(), v.len()))?;
                Ok(Self {
                    place,
                    first_name,
                    last_name,
                    age,
                    sex_place,
                    sex,
                    time,
                    pace,
                    city,
                    state,
                    bib,
                    clock_time: Some(clock_time),
                })
            }
        }
    }
}
