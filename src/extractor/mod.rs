//! Content extraction for crawled pages
//!
//! Turns a parsed HTML document into a [`PageContent`] record: title, meta
//! description, language, headings of the main content region and its
//! cleaned text, labelled with a [`PageType`] derived from the URL.
//!
//! # Components
//!
//! - `ContentExtractor`: compiled selectors plus cleanup settings
//! - `classify_page` / `course_code`: URL-only labelling
//! - `PageRecord`: the per-page outcome stored by the crawler

mod classify;
mod text;
mod types;

pub use classify::{classify_page, course_code};
pub use text::{MAX_TEXT_CHARS, TRUNCATION_MARKER};
pub use types::{PageContent, PageRecord, PageType};

use crate::config::ExtractionConfig;
use crate::url::network_location;
use crate::{ConfigError, ExtractionError};
use chrono::Utc;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Maximum number of H2 headings kept per page
pub const MAX_H2_HEADINGS: usize = 10;

/// Extracts structured content from parsed HTML documents
///
/// Built once per crawl; extraction never modifies the document, so the
/// same document can be used for link discovery before or after.
#[derive(Debug)]
pub struct ContentExtractor {
    containers: Vec<Selector>,
    title: Selector,
    meta_description: Selector,
    body: Selector,
    h1: Selector,
    h2: Selector,
    /// Lower-cased
    boilerplate_prefixes: Vec<String>,
}

impl ContentExtractor {
    /// Compiles the selectors of an extraction configuration
    pub fn new(config: &ExtractionConfig) -> Result<Self, ConfigError> {
        let containers = config
            .content_selectors
            .iter()
            .map(|s| compile(s))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            containers,
            title: compile("title")?,
            meta_description: compile(r#"meta[name="description"]"#)?,
            body: compile("body")?,
            h1: compile("h1")?,
            h2: compile("h2")?,
            boilerplate_prefixes: config
                .boilerplate_prefixes
                .iter()
                .map(|p| p.to_lowercase())
                .collect(),
        })
    }

    /// Extracts the content record of a page
    ///
    /// `url` is the final (post-redirect) URL of the page and is recorded
    /// as-is on the result.
    pub fn extract(&self, document: &Html, url: &str) -> Result<PageContent, ExtractionError> {
        let parsed = Url::parse(url).map_err(|e| ExtractionError::new(url, e.to_string()))?;

        let root = document.root_element();
        let container = self.find_container(document);

        let h1 = container
            .select(&self.h1)
            .next()
            .map(text::inline_text)
            .unwrap_or_default();

        let h2 = container
            .select(&self.h2)
            .take(MAX_H2_HEADINGS)
            .map(text::inline_text)
            .collect();

        let fragments = text::collect_text(container);
        let cleaned = text::clean_lines(&fragments, &self.boilerplate_prefixes);

        Ok(PageContent {
            url: url.to_string(),
            domain: network_location(&parsed),
            page_type: classify_page(url),
            course_code: course_code(url),
            crawled_at: Utc::now(),
            title: self.title(document),
            meta_description: self.meta_description(document),
            h1,
            h2,
            lang: root
                .value()
                .attr("lang")
                .map(|lang| lang.trim().to_lowercase())
                .unwrap_or_default(),
            text: text::truncate_text(cleaned),
        })
    }

    /// Extracts a page, folding a failure into an error-flagged record
    pub fn extract_record(&self, document: &Html, url: &str) -> PageRecord {
        match self.extract(document, url) {
            Ok(content) => PageRecord::Ok(content),
            Err(e) => {
                tracing::warn!("{}", e);
                PageRecord::failed(url, e.message)
            }
        }
    }

    /// Picks the main content region
    ///
    /// The first configured selector whose first match has any children
    /// wins; otherwise the body, even when it is empty, otherwise the whole
    /// document.
    fn find_container<'a>(&self, document: &'a Html) -> ElementRef<'a> {
        self.containers
            .iter()
            .filter_map(|selector| document.select(selector).next())
            .find(|element| element.has_children())
            .or_else(|| document.select(&self.body).next())
            .unwrap_or_else(|| document.root_element())
    }

    fn title(&self, document: &Html) -> String {
        document
            .select(&self.title)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .unwrap_or_default()
    }

    fn meta_description(&self, document: &Html) -> String {
        document
            .select(&self.meta_description)
            .filter_map(|element| element.value().attr("content"))
            .map(str::trim)
            .find(|content| !content.is_empty())
            .unwrap_or_default()
            .to_string()
    }
}

fn compile(selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector)
        .map_err(|e| ConfigError::InvalidSelector(format!("'{}': {:?}", selector, e)))
}
