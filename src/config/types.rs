use serde::{Deserialize, Serialize};

/// Default User-Agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "sitegraph/0.1";

/// Container selectors tried in order when looking for the main content region
pub const DEFAULT_CONTENT_SELECTORS: &[&str] = &[
    "main#main-content",
    "main[role=main]",
    "main",
    "article",
    "div#content",
    "div.region-content",
];

/// Lines starting with one of these (lower-cased) are dropped from page text
pub const DEFAULT_BOILERPLATE_PREFIXES: &[&str] = &["isel - instituto"];

/// Main configuration structure for a crawl run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed URL the traversal starts from
    pub seed: String,

    pub crawler: CrawlerConfig,
    pub scope: ScopeConfig,
    pub extraction: ExtractionConfig,
}

/// Traversal and fetch behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrawlerConfig {
    /// Maximum BFS depth, inclusive
    pub depth: u32,

    /// Per-request timeout in seconds
    pub timeout: f64,

    /// Delay applied before every fetch, in seconds
    pub delay: f64,

    /// Hard cap on the number of visited pages; 0 means no cap
    pub max_pages: Option<usize>,

    /// User-Agent header value
    pub user_agent: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            timeout: 7.0,
            delay: 0.0,
            max_pages: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl CrawlerConfig {
    /// The effective page budget, if any
    pub fn page_budget(&self) -> Option<usize> {
        self.max_pages.filter(|&max| max > 0)
    }
}

/// Static scope rules applied to every candidate URL
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ScopeConfig {
    /// Only follow URLs sharing the seed's registrable domain
    pub same_domain: bool,

    /// Only follow URLs starting with this exact string
    pub confine_prefix: Option<String>,

    /// Never follow URLs starting with any of these strings
    pub exclude: Vec<String>,
}

/// Content extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ExtractionConfig {
    /// Produce a content record for every HTML page
    pub enabled: bool,

    /// Main content container selectors, highest priority first
    pub content_selectors: Vec<String>,

    /// Site-wide header lines to drop from extracted text
    pub boilerplate_prefixes: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            content_selectors: DEFAULT_CONTENT_SELECTORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            boilerplate_prefixes: DEFAULT_BOILERPLATE_PREFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
