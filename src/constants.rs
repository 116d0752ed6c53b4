//! Application constants for marathon statistics
//!
//! Column layouts, race constants, default file locations and the export
//! header shared by the extractors, aggregator and presentation layer.

// =============================================================================
// Column Layouts
// =============================================================================

/// Place, Name, Age, Sex/plc, Sex, Time, Pace, City, State, Bib No
pub const STANDARD_COLUMNS: &[&str] = &[
    "place",
    "first_name",
    "last_name",
    "age",
    "sexpl",
    "sex",
    "time",
    "pace",
    "city",
    "state",
    "bib",
];

/// Standard layout plus the gun-to-mat clock time column
pub const CLOCK_TIME_COLUMNS: &[&str] = &[
    "place",
    "first_name",
    "last_name",
    "age",
    "sexpl",
    "sex",
    "time",
    "pace",
    "city",
    "state",
    "bib",
    "clocktime",
];

/// Label printed above the first column in plain-text dumps
pub const FIRST_COLUMN_LABEL: &str = "Place";

/// Characters that make up separator rules under text headers
pub const RULE_CHARS: &[char] = &['-', '='];

/// Header lines preceding data in fixed-column dumps (labels + underline)
pub const FIXED_HEADER_LINES: usize = 2;

// =============================================================================
// Race and Report Constants
// =============================================================================

/// Marathon distance in miles
pub const MARATHON_MILES: f64 = 26.2;

/// Number of cities listed in the report
pub const DEFAULT_TOP_CITIES: usize = 10;

pub const SEX_FEMALE: &str = "F";
pub const SEX_MALE: &str = "M";

// =============================================================================
// Files and Environment
// =============================================================================

/// Prefix shared by every year's result document
pub const RESULTS_FILE_PREFIX: &str = "marathon-results-by-place";

pub const DEFAULT_EXPORT_PATH: &str = "marathon-stats.csv";

/// Overrides the directory year files are resolved against
pub const DATA_DIR_ENV: &str = "MARATHON_DATA_DIR";

pub const CONFIG_DIR_NAME: &str = "marathon-stats";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Header row of the cross-year export; rows follow in ascending year order
pub const EXPORT_HEADER: &[&str] = &[
    "Total Runners",
    "Males",
    "Females",
    "States",
    "Combined Distance",
    "Mean Age",
    "Mean Pace",
    "Mean Finish Time",
];
