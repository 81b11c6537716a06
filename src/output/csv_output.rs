//! CSV link-graph export

use crate::crawler::CrawlReport;
use crate::output::traits::{GraphExporter, OutputResult};
use std::io::Write;

/// Writes one `page,link` row per edge
///
/// A page without outbound links still gets a row, with an empty link
/// column, so every visited page appears in the file.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvExporter;

impl GraphExporter for CsvExporter {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn export(&self, report: &CrawlReport, writer: &mut dyn Write) -> OutputResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["page", "link"])?;

        for (page, links) in &report.pages {
            if links.is_empty() {
                csv_writer.write_record([page.as_str(), ""])?;
            } else {
                for link in links {
                    csv_writer.write_record([page.as_str(), link.as_str()])?;
                }
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}
