//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with timeout and redirect handling
//! - HTML link discovery and filtering
//! - The BFS frontier and request pacing
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod parser;
mod report;
mod scheduler;

pub use coordinator::Crawler;
pub use fetcher::{build_http_client, fetch_url, is_probably_html, FetchedPage, MAX_REDIRECTS};
pub use parser::extract_links;
pub use report::CrawlReport;
pub use scheduler::{Frontier, FrontierEntry, Throttle};

use crate::config::Config;
use crate::Result;

/// Runs a complete crawl operation
///
/// This is the main entry point for a crawl. It will:
/// 1. Validate the configuration and build the HTTP client
/// 2. Traverse the site breadth-first from the seed
/// 3. Normalize the discovered link graph
/// 4. Return everything collected for export
///
/// # Example
///
/// ```no_run
/// use sitegraph::config::Config;
///
/// # async fn example() -> sitegraph::Result<()> {
/// let mut config = Config::default();
/// config.seed = "https://www.example.org".to_string();
/// let report = sitegraph::crawler::crawl(config).await?;
/// println!("{} pages visited", report.pages_visited());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: Config) -> Result<CrawlReport> {
    let mut crawler = Crawler::new(config)?;
    crawler.run().await?;
    Ok(crawler.into_report())
}
