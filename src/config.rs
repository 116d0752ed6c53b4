//! Configuration management and validation.
//!
//! Holds the year → source table handed to the dispatcher plus the few
//! report/export settings. Values are layered: built-in defaults, then an
//! optional TOML file, then the `MARATHON_DATA_DIR` environment variable,
//! then command-line overrides applied by the caller.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DATA_DIR_ENV, DEFAULT_EXPORT_PATH, DEFAULT_TOP_CITIES,
    RESULTS_FILE_PREFIX,
};
use crate::error::{Error, Result};
use crate::models::{RunnerSchema, SourceFormat, SourceKind};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where one year's results live and how to read them.
///
/// A year is only usable when it has both a path and a kind; anything less
/// is treated as unsupported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default)]
    pub kind: Option<SourceKind>,

    /// Column layout; standard when omitted
    #[serde(default)]
    pub schema: Option<RunnerSchema>,
}

impl SourceEntry {
    pub fn new(path: impl Into<PathBuf>, format: SourceFormat) -> Self {
        Self {
            path: Some(path.into()),
            kind: Some(format.kind),
            schema: Some(format.schema),
        }
    }

    /// Extraction routine, if one is configured
    pub fn format(&self) -> Option<SourceFormat> {
        self.kind.map(|kind| {
            SourceFormat::new(kind, self.schema.unwrap_or(RunnerSchema::Standard))
        })
    }

    /// Path and routine together, or `None` for a partial entry
    pub fn resolve(&self) -> Option<(&Path, SourceFormat)> {
        Some((self.path.as_deref()?, self.format()?))
    }
}

/// Fixed year → source mapping, read-only once built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTable {
    years: BTreeMap<u16, SourceEntry>,
}

impl SourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The result documents shipped for past races
    pub fn default_years() -> Self {
        let fixed = SourceFormat::new(SourceKind::FixedColumn, RunnerSchema::Standard);
        let text = SourceFormat::new(SourceKind::Whitespace, RunnerSchema::Standard);
        let html_clock = SourceFormat::new(SourceKind::Markup, RunnerSchema::WithClockTime);
        let html = SourceFormat::new(SourceKind::Markup, RunnerSchema::Standard);

        Self::new()
            .with_year(2012, SourceEntry::new(results_file(2012, "txt"), fixed))
            .with_year(2013, SourceEntry::new(results_file(2013, "txt"), text))
            .with_year(2014, SourceEntry::new(results_file(2014, "txt"), text))
            .with_year(2015, SourceEntry::new(results_file(2015, "HTML"), html_clock))
            .with_year(2016, SourceEntry::new(results_file(2016, "HTML"), html))
    }

    pub fn with_year(mut self, year: u16, entry: SourceEntry) -> Self {
        self.years.insert(year, entry);
        self
    }

    pub fn get(&self, year: u16) -> Option<&SourceEntry> {
        self.years.get(&year)
    }

    /// Configured years, ascending
    pub fn years(&self) -> impl Iterator<Item = u16> + '_ {
        self.years.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Resolve relative paths against `base`
    pub fn rooted_at(&self, base: &Path) -> Self {
        let years = self
            .years
            .iter()
            .map(|(&year, entry)| {
                let mut entry = entry.clone();
                entry.path = entry.path.map(|p| if p.is_relative() { base.join(p) } else { p });
                (year, entry)
            })
            .collect();
        Self { years }
    }
}

fn results_file(year: u16, extension: &str) -> String {
    format!("{RESULTS_FILE_PREFIX}-{year}.{extension}")
}

/// On-disk TOML layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    data_dir: Option<PathBuf>,
    export_path: Option<PathBuf>,
    top_cities: Option<usize>,
    #[serde(default)]
    years: HashMap<String, SourceEntry>,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory that relative source paths are resolved against
    pub data_dir: PathBuf,

    pub sources: SourceTable,

    /// Destination of the cross-year export
    pub export_path: PathBuf,

    /// Cities listed in the report
    pub top_cities: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            sources: SourceTable::default_years(),
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            top_cities: DEFAULT_TOP_CITIES,
        }
    }
}

impl AppConfig {
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_export_path(mut self, export_path: impl Into<PathBuf>) -> Self {
        self.export_path = export_path.into();
        self
    }

    pub fn with_top_cities(mut self, top_cities: usize) -> Self {
        self.top_cities = top_cities;
        self
    }

    pub fn with_sources(mut self, sources: SourceTable) -> Self {
        self.sources = sources;
        self
    }

    /// `<config dir>/marathon-stats/config.toml`, if the platform has one
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Defaults, then `config_file`, then the data-dir environment variable
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = config_file {
            let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
            config.merge_toml(&content, path)?;
        }

        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            debug!("Data directory from {}: {:?}", DATA_DIR_ENV, dir);
            config.data_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Apply the settings in a TOML document; `origin` names it in errors
    pub fn merge_toml(&mut self, content: &str, origin: &Path) -> Result<()> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| Error::config_file(origin, e))?;

        if let Some(dir) = file.data_dir {
            self.data_dir = dir;
        }
        if let Some(path) = file.export_path {
            self.export_path = path;
        }
        if let Some(top) = file.top_cities {
            self.top_cities = top;
        }
        for (key, entry) in file.years {
            let year = key.trim().parse::<u16>().map_err(|_| {
                Error::configuration(format!("Invalid year '{key}' in {}", origin.display()))
            })?;
            self.sources.years.insert(year, entry);
        }

        debug!(
            "Merged config from {}: {} years configured",
            origin.display(),
            self.sources.len()
        );
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_cities == 0 {
            return Err(Error::configuration("top_cities must be at least 1"));
        }
        if self.export_path.as_os_str().is_empty() {
            return Err(Error::configuration("export_path must not be empty"));
        }
        Ok(())
    }

    /// Source table with paths resolved against the data directory
    pub fn resolved_sources(&self) -> SourceTable {
        self.sources.rooted_at(&self.data_dir)
    }
}
