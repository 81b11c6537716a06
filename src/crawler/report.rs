//! Result of a finished crawl run

use crate::config::Config;
use crate::state::{ContentRecords, DiscoveredGraph, ErrorLog, VisitedSet};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Everything a crawl run produced, ready for export
///
/// Maps keep traversal order, so exports list pages in the order they were
/// processed.
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Seed URL with trailing slashes trimmed
    pub root: String,

    /// Effective configuration of the run
    pub config: Config,

    /// SHA-256 fingerprint of `config`
    pub config_hash: String,

    /// Every processed URL, successful or not
    pub visited: VisitedSet,

    /// Page URL -> normalized, globally deduplicated outbound links
    pub pages: DiscoveredGraph,

    /// URL -> fetch failure description
    pub errors: ErrorLog,

    /// Content records; empty unless extraction was enabled
    pub content: ContentRecords,

    /// Recorded pages per BFS depth
    pub depth_counts: BTreeMap<u32, u64>,

    /// Pages answered with a non-HTML content type
    pub non_html_pages: u64,

    /// Number of HTTP requests issued
    pub fetches: u64,

    /// Outbound links recorded before draining
    pub total_links: usize,

    /// Globally unique links after draining
    pub unique_links: usize,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlReport {
    /// Wall-clock duration of the run
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }

    /// Number of visited URLs
    pub fn pages_visited(&self) -> usize {
        self.visited.len()
    }
}
