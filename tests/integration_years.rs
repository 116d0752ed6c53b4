//! End-to-end tests: result documents on disk through dispatcher,
//! aggregation and presentation.

use std::fs;
use std::path::Path;

use marathon_stats::aggregate::Mode;
use marathon_stats::cli::commands::{export_all, report_year};
use marathon_stats::config::SourceEntry;
use marathon_stats::models::{SourceFormat, SourceKind};
use marathon_stats::{AppConfig, RunnerSchema, SourceTable, YearDispatcher, aggregate};
use tempfile::TempDir;

fn row(values: &[&str]) -> String {
    let cells: String = values.iter().map(|v| format!("<td>{v}</td>")).collect();
    format!("<tr>{cells}</tr>\n")
}

fn results_html() -> String {
    let mut html = String::from(
        "<html><body><table>\n<tr><th>Place</th><th>Name</th><th>City</th></tr>\n",
    );
    html.push_str(&row(&[
        "1", "Ann", "Lee", "30", "1", "F", "3:00:00", "6:52", "Memphis", "TN", "101",
    ]));
    html.push_str(&row(&[
        "2", "Bo", "Ray", "31", "1", "M", "3:45:10", "8:36", "Memphis", "TN", "102",
    ]));
    html.push_str(&row(&["3", "Cy", "Dee", "44"]));
    html.push_str(&row(&[
        "4", "Di", "Fox", "32", "2", "F", "4:00:00", "9:09", "Oxford", "MS", "103",
    ]));
    html.push_str("</table></body></html>\n");
    html
}

const RESULTS_TEXT: &str = "\
Place First Last Age Sexpl Sex Time    Pace City    State Bib
----- ----- ---- --- ----- --- ------- ---- ------- ----- ---
1     Ann   Lee  34  1     F   3:10:05 7:15 Memphis TN    101
2     Bo    Ray  41  1     M   3:20:00 7:38 Oxford  MS    102
";

/// Data directory with an HTML year (2016) and a text year (2013)
fn setup_data_dir() -> (TempDir, AppConfig) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("results-2016.html"), results_html()).unwrap();
    fs::write(dir.path().join("results-2013.txt"), RESULTS_TEXT).unwrap();

    let sources = SourceTable::new()
        .with_year(
            2016,
            SourceEntry::new(
                "results-2016.html",
                SourceFormat::new(SourceKind::Markup, RunnerSchema::Standard),
            ),
        )
        .with_year(
            2013,
            SourceEntry::new(
                "results-2013.txt",
                SourceFormat::new(SourceKind::Whitespace, RunnerSchema::Standard),
            ),
        )
        .with_year(2014, SourceEntry::default());

    let config = AppConfig::default()
        .with_data_dir(dir.path())
        .with_sources(sources)
        .with_export_path(dir.path().join("export.csv"));
    (dir, config)
}

#[test]
fn test_html_year_end_to_end() {
    let (_dir, config) = setup_data_dir();
    let dispatcher = YearDispatcher::new(config.resolved_sources());

    let runners = dispatcher.parse(2016).unwrap();
    assert_eq!(runners.len(), 3);
    assert_eq!(runners[2].last_name, "Fox");

    let report = aggregate::aggregate(&runners).unwrap();
    assert_eq!(report.runner_count, 3);
    assert_eq!(report.state_count, 2);
    assert_eq!(report.combined_distance, 78);
    assert_eq!(report.top_cities[0].city, "Memphis");
    assert_eq!(report.top_cities[0].count, 2);
    assert_eq!(report.age.as_ref().unwrap().mode, Mode::NoUniqueMode);
}

#[test]
fn test_text_year_end_to_end() {
    let (_dir, config) = setup_data_dir();
    let dispatcher = YearDispatcher::new(config.resolved_sources());

    let result = dispatcher.parse_with_stats(2013).unwrap();
    assert_eq!(result.runners.len(), 2);
    assert_eq!(result.stats.rows_dropped, 2);
    assert_eq!(result.runners[1].city, "Oxford");
}

#[test]
fn test_unavailable_years() {
    let (_dir, config) = setup_data_dir();
    let dispatcher = YearDispatcher::new(config.resolved_sources());

    assert_eq!(dispatcher.parse(1999), None);
    // configured without path or kind
    assert_eq!(dispatcher.parse(2014), None);
}

#[test]
fn test_parse_is_repeatable() {
    let (_dir, config) = setup_data_dir();
    let dispatcher = YearDispatcher::new(config.resolved_sources());

    assert_eq!(dispatcher.parse(2016), dispatcher.parse(2016));
}

#[test]
fn test_report_year_output() {
    let (_dir, config) = setup_data_dir();

    let mut out = Vec::new();
    assert!(report_year(&config, 2016, &mut out).unwrap());
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("3 Marathon Runners in 2016"));
    assert!(text.contains("From 2 different states"));
    assert!(text.contains("Total distance combined ==> 78+ miles"));
    assert!(text.contains("- Memphis (2)"));

    let mut out = Vec::new();
    assert!(!report_year(&config, 1999, &mut out).unwrap());
    assert!(out.is_empty());
}

#[test]
fn test_export_writes_available_years() {
    let (dir, config) = setup_data_dir();

    let rows = export_all(&config, false).unwrap();
    assert_eq!(rows, 2);

    let content = fs::read_to_string(dir.path().join("export.csv")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "Total Runners,Males,Females,States,Combined Distance,Mean Age,Mean Pace,Mean Finish Time"
    );
    // 2013 then 2016; 2014 has no data and gets no row
    assert!(lines[1].starts_with("2,1,1,2,52,37,"));
    assert!(lines[2].starts_with("3,1,2,2,78,31,"));
}

#[test]
fn test_config_file_adds_year() {
    let (_dir, mut config) = setup_data_dir();
    let toml = r#"
        [years.2017]
        path = "results-2016.html"
        kind = "markup"
    "#;
    config.merge_toml(toml, Path::new("inline.toml")).unwrap();

    let dispatcher = YearDispatcher::new(config.resolved_sources());
    assert_eq!(dispatcher.years(), vec![2013, 2014, 2016, 2017]);
    assert_eq!(dispatcher.parse(2017).map(|r| r.len()), Some(3));
}
