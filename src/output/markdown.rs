//! Markdown summary generation
//!
//! This module generates a human-readable markdown summary of a crawl run,
//! including statistics, page-type and depth breakdowns and an error list.

use crate::crawler::CrawlReport;
use crate::output::stats::CrawlStatistics;
use crate::output::traits::OutputResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Number of errors listed in the summary
const MAX_LISTED_ERRORS: usize = 20;

/// Generates a markdown summary of a crawl and writes it to a file
///
/// # Arguments
///
/// * `report` - The finished crawl
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote markdown summary
/// * `Err(OutputError)` - Failed to write summary
pub fn generate_markdown_summary(report: &CrawlReport, output_path: &Path) -> OutputResult<()> {
    let stats = CrawlStatistics::from_report(report);
    let markdown = format_markdown_summary(report, &stats);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a crawl summary as markdown
pub fn format_markdown_summary(report: &CrawlReport, stats: &CrawlStatistics) -> String {
    let mut md = String::new();

    md.push_str("# sitegraph Crawl Summary\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Root**: {}\n", report.root));
    md.push_str(&format!("- **Started**: {}\n", report.started_at.to_rfc3339()));
    md.push_str(&format!("- **Finished**: {}\n", report.finished_at.to_rfc3339()));
    md.push_str(&format!(
        "- **Duration**: {:.1} seconds\n",
        stats.duration_seconds
    ));
    md.push_str(&format!("- **Max Depth**: {}\n", report.config.crawler.depth));
    if let Some(max_pages) = report.config.crawler.page_budget() {
        md.push_str(&format!("- **Page Budget**: {}\n", max_pages));
    }
    md.push_str(&format!(
        "- **Same Domain**: {}\n",
        if report.config.scope.same_domain { "yes" } else { "no" }
    ));
    md.push_str(&format!("- **Config Hash**: {}\n\n", report.config_hash));

    // Overall statistics
    md.push_str("## Overall Statistics\n\n");
    md.push_str(&format!("- **Pages Visited**: {}\n", stats.pages_visited));
    md.push_str(&format!("- **HTML Pages**: {}\n", stats.html_pages));
    md.push_str(&format!("- **Non-HTML Pages**: {}\n", stats.non_html_pages));
    md.push_str(&format!("- **Errors**: {}\n", stats.errors));
    md.push_str(&format!("- **Error Rate**: {:.2}%\n", stats.error_rate()));
    md.push_str(&format!("- **Links Recorded**: {}\n", stats.total_links));
    md.push_str(&format!("- **Unique Links**: {}\n\n", stats.unique_links));

    // Content breakdown
    if stats.content_ok + stats.content_errors > 0 {
        md.push_str("## Page Types\n\n");
        md.push_str("| Type | Pages |\n");
        md.push_str("|------|-------|\n");
        for (page_type, count) in &stats.pages_by_type {
            md.push_str(&format!("| {} | {} |\n", page_type, count));
        }
        md.push_str(&format!(
            "\nExtraction failures: {}\n\n",
            stats.content_errors
        ));
    }

    // Depth breakdown
    if !stats.pages_by_depth.is_empty() {
        md.push_str("## Depth Breakdown\n\n");
        md.push_str("| Depth | Pages |\n");
        md.push_str("|-------|-------|\n");
        for (depth, count) in &stats.pages_by_depth {
            md.push_str(&format!("| {} | {} |\n", depth, count));
        }
        md.push('\n');
    }

    // Errors
    if !report.errors.is_empty() {
        md.push_str(&format!(
            "## First {} Errors\n\n",
            MAX_LISTED_ERRORS.min(report.errors.len())
        ));
        md.push_str("| URL | Error |\n");
        md.push_str("|-----|-------|\n");
        for (url, message) in report.errors.iter().take(MAX_LISTED_ERRORS) {
            md.push_str(&format!("| {} | {} |\n", url, message.replace('|', "\\|")));
        }
        if report.errors.len() > MAX_LISTED_ERRORS {
            md.push_str(&format!(
                "\n... and {} more\n",
                report.errors.len() - MAX_LISTED_ERRORS
            ));
        }
        md.push('\n');
    }

    md
}
