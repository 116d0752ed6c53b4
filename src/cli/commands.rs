//! Command implementations for the marathon-stats CLI
//!
//! Sets up logging and configuration, then either prints one year's report
//! or writes the cross-year export.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::aggregate::Aggregator;
use crate::cli::args::{Args, Target};
use crate::config::AppConfig;
use crate::dispatcher::YearDispatcher;
use crate::report::{ExportWriter, render_report};

/// Main command runner
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args);

    let Some(target) = args.target() else {
        print_usage();
        return Ok(());
    };

    let config = load_configuration(&args)?;
    let mut stdout = std::io::stdout().lock();

    match target {
        Target::Year(year) => {
            if !report_year(&config, year, &mut stdout)? {
                println!("{}", format!("No data available for {year}.").yellow());
            }
        }
        Target::Export => {
            let rows = export_all(&config, true)?;
            println!(
                "Wrote {} year(s) to {}",
                rows,
                config.export_path.display().to_string().bright_cyan()
            );
        }
    }
    Ok(())
}

/// Print the report for `year`; `false` when the year has no data
pub fn report_year<W: Write>(config: &AppConfig, year: u16, out: &mut W) -> Result<bool> {
    let dispatcher = YearDispatcher::new(config.resolved_sources());
    let aggregator = Aggregator::new(config.top_cities);

    let Some(report) = dispatcher
        .parse(year)
        .and_then(|runners| aggregator.aggregate(&runners))
    else {
        info!("No data available for {}", year);
        return Ok(false);
    };

    render_report(out, year, &report).context("Failed to write report")?;
    Ok(true)
}

/// Aggregate every configured year and write one export row per year with
/// data. Returns the number of rows written.
pub fn export_all(config: &AppConfig, show_progress: bool) -> Result<usize> {
    let dispatcher = YearDispatcher::new(config.resolved_sources());
    let aggregator = Aggregator::new(config.top_cities);
    let years = dispatcher.years();

    let progress = if show_progress {
        let bar = ProgressBar::new(years.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut export = create_export(&config.export_path)?;
    for year in years {
        progress.set_message(year.to_string());
        match dispatcher.parse(year).and_then(|r| aggregator.aggregate(&r)) {
            Some(report) => export
                .write_report(&report)
                .with_context(|| format!("Failed to write export row for {year}"))?,
            None => debug!("Skipping {} in export: no data", year),
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    let rows = export.finish().context("Failed to flush export file")?;
    info!("Exported {} years to {}", rows, config.export_path.display());
    Ok(rows)
}

fn create_export(path: &Path) -> Result<ExportWriter<std::fs::File>> {
    ExportWriter::create(path)
        .with_context(|| format!("Failed to create export file {}", path.display()))
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("marathon_stats={}", log_level)));

    // try_init: a subscriber may already be installed (tests)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Layered configuration: file -> environment -> command line
fn load_configuration(args: &Args) -> Result<AppConfig> {
    let default_path = AppConfig::default_config_path().filter(|p| p.exists());
    let config_file = args.config_file.as_deref().or(default_path.as_deref());

    match config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No config file found, using defaults"),
    }

    let mut config = AppConfig::load_layered(config_file).context("Failed to load configuration")?;

    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(output) = &args.output {
        config.export_path = output.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Usage guidance for an empty or unrecognised target
pub fn print_usage() {
    println!("{}", "marathon-stats - marathon finisher statistics".bright_green().bold());
    println!();
    println!("USAGE:");
    println!("    marathon-stats <YEAR>      Print the report for a four-digit race year");
    println!("    marathon-stats export      Write one CSV row per available year");
    println!();
    println!("OPTIONS:");
    println!("    -d, --data-dir <PATH>    Directory holding the result documents");
    println!("    -c, --config <FILE>      TOML config file");
    println!("    -o, --output <FILE>      Export destination (default marathon-stats.csv)");
    println!("    -v, --verbose            More log output (repeat for debug)");
    println!("    -q, --quiet              Only log errors");
    println!();
    println!("EXAMPLES:");
    println!("    marathon-stats 2016");
    println!("    marathon-stats export --output results.csv");
}
