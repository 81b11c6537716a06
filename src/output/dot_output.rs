//! Graphviz DOT link-graph export

use crate::crawler::CrawlReport;
use crate::output::traits::{GraphExporter, OutputResult};
use std::io::Write;

/// Writes the graph as a `digraph` with one edge per (page, link)
#[derive(Debug, Default, Clone, Copy)]
pub struct DotExporter;

impl GraphExporter for DotExporter {
    fn name(&self) -> &'static str {
        "dot"
    }

    fn export(&self, report: &CrawlReport, writer: &mut dyn Write) -> OutputResult<()> {
        writeln!(writer, "digraph G {{")?;
        writeln!(writer, "  graph [overlap=false];")?;
        writeln!(writer, "  node [shape=box];")?;

        for (page, links) in &report.pages {
            for link in links {
                writeln!(writer, "  \"{}\" -> \"{}\";", escape(page), escape(link))?;
            }
        }

        writeln!(writer, "}}")?;
        Ok(())
    }
}

/// Escapes a value for use inside a double-quoted DOT identifier
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
