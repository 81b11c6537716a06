//! JSON link-graph export

use crate::config::Config;
use crate::crawler::CrawlReport;
use crate::output::traits::{GraphExporter, OutputResult};
use crate::state::{DiscoveredGraph, ErrorLog};
use serde::Serialize;
use std::io::Write;

/// Writes `{root, config, pages, errors}` as pretty-printed JSON
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonExporter;

/// Shape of the JSON document
#[derive(Serialize)]
struct GraphDocument<'a> {
    root: &'a str,
    config: &'a Config,
    pages: &'a DiscoveredGraph,
    errors: &'a ErrorLog,
}

impl GraphExporter for JsonExporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn export(&self, report: &CrawlReport, writer: &mut dyn Write) -> OutputResult<()> {
        let document = GraphDocument {
            root: &report.root,
            config: &report.config,
            pages: &report.pages,
            errors: &report.errors,
        };

        serde_json::to_writer_pretty(&mut *writer, &document)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
