use crate::extractor::PageRecord;
use crate::url::canonical_link;
use indexmap::{IndexMap, IndexSet};
use std::collections::{BTreeMap, HashSet};

/// URLs that have been dequeued and processed, in processing order
pub type VisitedSet = IndexSet<String>;

/// Page URL -> outbound links found on that page
pub type DiscoveredGraph = IndexMap<String, Vec<String>>;

/// URL -> description of why fetching it failed
pub type ErrorLog = IndexMap<String, String>;

/// Page URL -> extracted content (or extraction failure)
pub type ContentRecords = IndexMap<String, PageRecord>;

/// Everything one crawl run accumulates
///
/// All collections grow monotonically and are owned by a single traversal
/// engine; entries are written once and never replaced.
#[derive(Debug, Default)]
pub struct CrawlState {
    visited: VisitedSet,
    discovered: DiscoveredGraph,
    errors: ErrorLog,
    content: ContentRecords,

    /// Number of pages recorded at each depth
    depth_counts: BTreeMap<u32, u64>,

    /// Pages that answered with a non-HTML content type
    non_html_pages: u64,
}

impl CrawlState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    pub fn discovered(&self) -> &DiscoveredGraph {
        &self.discovered
    }

    pub fn errors(&self) -> &ErrorLog {
        &self.errors
    }

    pub fn content(&self) -> &ContentRecords {
        &self.content
    }

    pub fn depth_counts(&self) -> &BTreeMap<u32, u64> {
        &self.depth_counts
    }

    pub fn non_html_pages(&self) -> u64 {
        self.non_html_pages
    }

    /// Returns true if a graph entry already exists for `url`
    pub fn has_page(&self, url: &str) -> bool {
        self.discovered.contains_key(url)
    }

    /// Records a failed fetch
    ///
    /// The URL is marked visited so it is never queued again; the first
    /// error recorded for a URL is kept.
    pub fn record_failure(&mut self, url: &str, message: String) {
        self.visited.insert(url.to_string());
        self.errors.entry(url.to_string()).or_insert(message);
    }

    /// Records a processed HTML page and its outbound links
    ///
    /// Returns false, leaving the existing entry untouched, if the page was
    /// already recorded (two queued URLs redirected to the same place).
    pub fn record_page(&mut self, url: &str, links: Vec<String>, depth: u32) -> bool {
        self.visited.insert(url.to_string());
        if self.discovered.contains_key(url) {
            return false;
        }

        self.discovered.insert(url.to_string(), links);
        *self.depth_counts.entry(depth).or_insert(0) += 1;
        true
    }

    /// Records a page whose response was not HTML
    pub fn record_non_html(&mut self, url: &str, depth: u32) -> bool {
        let inserted = self.record_page(url, Vec::new(), depth);
        if inserted {
            self.non_html_pages += 1;
        }
        inserted
    }

    /// Stores the content record for a page, unless one already exists
    pub fn record_content(&mut self, url: &str, record: PageRecord) {
        self.content.entry(url.to_string()).or_insert(record);
    }

    /// Runs the post-traversal link normalization over the graph
    ///
    /// Returns the number of globally unique links that survived.
    pub fn normalize_links(&mut self) -> usize {
        normalize_graph(&mut self.discovered)
    }

    /// Splits the state into its collections
    pub fn into_parts(self) -> CrawlStateParts {
        CrawlStateParts {
            visited: self.visited,
            discovered: self.discovered,
            errors: self.errors,
            content: self.content,
            depth_counts: self.depth_counts,
            non_html_pages: self.non_html_pages,
        }
    }
}

/// Owned collections of a finished crawl
#[derive(Debug, Default)]
pub struct CrawlStateParts {
    pub visited: VisitedSet,
    pub discovered: DiscoveredGraph,
    pub errors: ErrorLog,
    pub content: ContentRecords,
    pub depth_counts: BTreeMap<u32, u64>,
    pub non_html_pages: u64,
}

/// Canonicalizes every outbound link and removes cross-page duplicates
///
/// Pages are visited in traversal order. Each link is passed through
/// [`canonical_link`] and kept only the first time that canonical form is
/// seen anywhere in the graph, so a link shared by several pages survives
/// only on the earliest one. Page keys themselves are not changed.
///
/// Returns the number of unique links kept.
pub fn normalize_graph(graph: &mut DiscoveredGraph) -> usize {
    let mut seen: HashSet<String> = HashSet::new();

    for links in graph.values_mut() {
        let mut kept = Vec::with_capacity(links.len());
        for link in links.iter() {
            let clean = canonical_link(link);
            if seen.insert(clean.clone()) {
                kept.push(clean);
            }
        }
        *links = kept;
    }

    seen.len()
}
