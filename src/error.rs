//! Error handling for result extraction and reporting.
//!
//! Only configuration problems and I/O failures while writing output surface
//! as errors. Row-level and year-level problems are recovered where they
//! happen and reported as statistics or "no data".

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Setup problem: missing column names, invalid config values
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Export failed: {0}")]
    Export(#[from] csv::Error),

    /// A row whose captured value count does not match the schema arity
    #[error("Row shape mismatch: expected {expected} values, found {found}")]
    RowShape { expected: usize, found: usize },
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error tied to a path
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn config_file(path: impl AsRef<Path>, source: toml::de::Error) -> Self {
        Self::ConfigFile {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn row_shape(expected: usize, found: usize) -> Self {
        Self::RowShape { expected, found }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
