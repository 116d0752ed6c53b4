//! Cross-year CSV export: one row of headline figures per year
//!
//! The header is fixed and carries no year column, so callers write rows in
//! ascending year order.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::aggregate::Report;
use crate::constants::EXPORT_HEADER;
use crate::error::Result;

/// Writes the export header once, then one row per [`write_report`](Self::write_report)
pub struct ExportWriter<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl ExportWriter<File> {
    pub fn create(path: &Path) -> Result<Self> {
        Self::from_writer(csv::Writer::from_path(path)?)
    }
}

impl<W: Write> ExportWriter<W> {
    pub fn new(inner: W) -> Result<Self> {
        Self::from_writer(csv::Writer::from_writer(inner))
    }

    fn from_writer(mut writer: csv::Writer<W>) -> Result<Self> {
        writer.write_record(EXPORT_HEADER)?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn write_report(&mut self, report: &Report) -> Result<()> {
        let mean_age = report
            .age
            .as_ref()
            .map(|a| a.mean.to_string())
            .unwrap_or_default();
        let mean_pace = report.pace_text().map(|p| p.mean).unwrap_or_default();
        let mean_time = report
            .finish_time_text()
            .map(|t| t.mean)
            .unwrap_or_default();

        self.writer.write_record([
            report.runner_count.to_string(),
            report.males.to_string(),
            report.females.to_string(),
            report.state_count.to_string(),
            report.combined_distance.to_string(),
            mean_age,
            mean_pace,
            mean_time,
        ])?;
        self.rows += 1;
        Ok(())
    }

    /// Flush and return the number of year rows written
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush().map_err(csv::Error::from)?;
        Ok(self.rows)
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()).into())
    }
}
