//! Statistics generation from a finished crawl
//!
//! This module derives summary numbers from a [`CrawlReport`] and prints
//! them at the end of a run.

use crate::crawler::CrawlReport;
use crate::extractor::{PageRecord, PageType};
use std::collections::BTreeMap;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrawlStatistics {
    /// URLs processed, successfully or not
    pub pages_visited: u64,

    /// HTTP requests issued
    pub fetches: u64,

    /// Pages recorded in the graph with an HTML body
    pub html_pages: u64,

    /// Pages answered with a non-HTML content type
    pub non_html_pages: u64,

    /// Failed fetches
    pub errors: u64,

    /// Outbound links recorded before normalization
    pub total_links: u64,

    /// Globally unique links after normalization
    pub unique_links: u64,

    pub content_ok: u64,
    pub content_errors: u64,

    /// Successfully extracted pages per type
    pub pages_by_type: BTreeMap<PageType, u64>,

    /// Recorded pages per BFS depth
    pub pages_by_depth: BTreeMap<u32, u64>,

    pub duration_seconds: f64,
}

impl CrawlStatistics {
    /// Computes the statistics of a report
    pub fn from_report(report: &CrawlReport) -> Self {
        let mut pages_by_type = BTreeMap::new();
        let mut content_ok = 0;
        let mut content_errors = 0;

        for record in report.content.values() {
            match record {
                PageRecord::Ok(content) => {
                    content_ok += 1;
                    *pages_by_type.entry(content.page_type).or_insert(0) += 1;
                }
                PageRecord::Error { .. } => content_errors += 1,
            }
        }

        let recorded = report.pages.len() as u64;
        let duration_seconds = report.duration().num_milliseconds().max(0) as f64 / 1000.0;

        Self {
            pages_visited: report.visited.len() as u64,
            fetches: report.fetches,
            html_pages: recorded.saturating_sub(report.non_html_pages),
            non_html_pages: report.non_html_pages,
            errors: report.errors.len() as u64,
            total_links: report.total_links as u64,
            unique_links: report.unique_links as u64,
            content_ok,
            content_errors,
            pages_by_type,
            pages_by_depth: report.depth_counts.clone(),
            duration_seconds,
        }
    }

    /// Returns the share of visited URLs that failed, as a percentage
    pub fn error_rate(&self) -> f64 {
        if self.pages_visited == 0 {
            return 0.0;
        }
        (self.errors as f64 / self.pages_visited as f64) * 100.0
    }

    /// Returns fetched pages per second over the whole run
    pub fn pages_per_second(&self) -> f64 {
        if self.duration_seconds <= 0.0 {
            return 0.0;
        }
        self.fetches as f64 / self.duration_seconds
    }
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  Pages visited: {}", stats.pages_visited);
    println!("  HTML pages: {}", stats.html_pages);
    println!("  Non-HTML pages: {}", stats.non_html_pages);
    println!(
        "  Errors: {} ({:.1}%)",
        stats.errors,
        stats.error_rate()
    );
    println!("  Links recorded: {}", stats.total_links);
    println!("  Unique links: {}", stats.unique_links);
    println!(
        "  Duration: {:.1}s ({:.2} pages/sec)",
        stats.duration_seconds,
        stats.pages_per_second()
    );
    println!();

    if stats.content_ok + stats.content_errors > 0 {
        println!("Content Records:");
        println!("  Extracted: {}", stats.content_ok);
        println!("  Failed: {}", stats.content_errors);

        let mut type_counts: Vec<_> = stats.pages_by_type.iter().collect();
        type_counts.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
        for (page_type, count) in type_counts {
            println!("  {}: {}", page_type, count);
        }
        println!();
    }

    if !stats.pages_by_depth.is_empty() {
        println!("Pages by Depth:");
        for (depth, count) in &stats.pages_by_depth {
            println!("  {}: {}", depth, count);
        }
        println!();
    }
}
