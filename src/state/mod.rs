//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlPhase`: lifecycle of one crawl run (idle, running, draining, done)
//! - `CrawlState`: visited set, discovered graph, error log and content records

mod crawl_phase;
mod crawl_state;

// Re-export main types
pub use crawl_phase::CrawlPhase;
pub use crawl_state::{
    normalize_graph, ContentRecords, CrawlState, CrawlStateParts, DiscoveredGraph, ErrorLog,
    VisitedSet,
};
