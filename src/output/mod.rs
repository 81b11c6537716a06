//! Output module for exporting crawl results
//!
//! This module handles:
//! - Exporting the link graph as JSON, CSV or Graphviz DOT
//! - Exporting content records as NDJSON
//! - Generating statistics and markdown summaries

mod csv_output;
mod dot_output;
mod json_output;
mod markdown;
mod ndjson_output;
pub mod stats;
mod traits;

pub use csv_output::CsvExporter;
pub use dot_output::DotExporter;
pub use json_output::JsonExporter;
pub use markdown::{format_markdown_summary, generate_markdown_summary};
pub use ndjson_output::write_content_records;
pub use stats::{print_statistics, CrawlStatistics};
pub use traits::{GraphExporter, OutputError, OutputResult};

use crate::crawler::CrawlReport;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Link-graph file format, chosen from the output file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
    Dot,
}

impl OutputFormat {
    /// Picks the format for a path
    ///
    /// Returns `None` for an unknown or missing extension; callers fall
    /// back to JSON.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "dot" => Some(Self::Dot),
            _ => None,
        }
    }

    fn exporter(&self) -> Box<dyn GraphExporter> {
        match self {
            Self::Json => Box::new(JsonExporter),
            Self::Csv => Box::new(CsvExporter),
            Self::Dot => Box::new(DotExporter),
        }
    }
}

/// Writes the link graph of a report to `path`
///
/// The format follows the file extension; an unknown extension is written
/// as JSON with a warning. Returns the format used.
pub fn write_graph(report: &CrawlReport, path: &Path) -> OutputResult<OutputFormat> {
    let format = OutputFormat::from_path(path).unwrap_or_else(|| {
        tracing::warn!(
            "Unrecognized output extension for {}, writing JSON",
            path.display()
        );
        OutputFormat::Json
    });

    let exporter = format.exporter();
    let mut writer = BufWriter::new(File::create(path)?);
    exporter.export(report, &mut writer)?;
    writer.flush()?;

    tracing::info!(
        "Wrote {} pages as {} to {}",
        report.pages.len(),
        exporter.name(),
        path.display()
    );
    Ok(format)
}

/// Writes the content records of a report to `path` as NDJSON
///
/// Returns the number of records written.
pub fn write_content(report: &CrawlReport, path: &Path) -> OutputResult<usize> {
    let mut writer = BufWriter::new(File::create(path)?);
    let written = write_content_records(&report.content, &mut writer)?;
    writer.flush()?;

    tracing::info!("Wrote {} content records to {}", written, path.display());
    Ok(written)
}
