//! Exporter traits and error types
//!
//! This module defines the trait interface for link-graph exporters and the
//! errors they can return.

use crate::crawler::CrawlReport;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for link-graph exporters
///
/// An exporter serializes the discovered graph of a finished crawl into one
/// file format. Exporters write to any `Write`, so they can target files,
/// buffers or stdout alike.
pub trait GraphExporter {
    /// Short name of the format, used in log messages
    fn name(&self) -> &'static str;

    /// Writes the report's graph to `writer`
    ///
    /// # Arguments
    ///
    /// * `report` - The finished crawl
    /// * `writer` - Destination of the serialized graph
    fn export(&self, report: &CrawlReport, writer: &mut dyn Write) -> OutputResult<()>;
}
