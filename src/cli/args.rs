//! Command-line argument definitions
//!
//! One positional target selects the action: a four-digit year prints that
//! year's report, `export` writes the cross-year CSV file.

use clap::Parser;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Marathon results statistics
#[derive(Debug, Clone, Parser)]
#[command(
    name = "marathon-stats",
    version,
    about = "Fun facts about marathon finishers, year by year",
    long_about = "Reads the published finisher lists for each race year (HTML tables or \
                  plain-text dumps), normalises them into one record shape and reports \
                  counts, distributions and averages."
)]
pub struct Args {
    /// Four-digit race year, or `export` for the cross-year CSV
    #[arg(value_name = "YEAR|export")]
    pub target: Option<String>,

    /// Directory holding the result documents
    #[arg(short = 'd', long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// TOML config file (defaults to the user config directory when present)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Destination for `export`
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Year(u16),
    Export,
}

impl Target {
    /// `None` for anything that is neither a four-digit year nor `export`
    pub fn parse(raw: &str) -> Option<Self> {
        static YEAR: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("static regex must compile"));

        let raw = raw.trim();
        if raw == "export" {
            Some(Target::Export)
        } else if YEAR.is_match(raw) {
            raw.parse().ok().map(Target::Year)
        } else {
            None
        }
    }
}

impl Args {
    pub fn target(&self) -> Option<Target> {
        self.target.as_deref().and_then(Target::parse)
    }

    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
