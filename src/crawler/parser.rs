//! Link discovery for fetched HTML pages
//!
//! Pulls every `<a href>` out of a document and turns it into an absolute,
//! fragment-free `http(s)` URL, dropping links that cannot lead to another
//! document worth crawling.

use scraper::{Html, Selector};
use std::collections::BTreeSet;
use url::Url;

/// Schemes that never point at a crawlable document
const SKIPPED_SCHEMES: &[&str] = &["mailto:", "tel:", "javascript:", "data:"];

/// File extensions of resources that are not HTML documents
const NON_DOCUMENT_EXTENSIONS: &[&str] = &[
    ".pdf", ".jpg", ".jpeg", ".png", ".gif", ".svg", ".ico", ".webp", ".zip", ".rar", ".7z",
    ".mp4", ".mp3", ".css", ".js", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx",
];

/// Query parameters used for pagination
const PAGINATION_MARKERS: &[&str] = &["?page=", "?p="];

/// Extracts the crawlable links of a document
///
/// Relative hrefs are resolved against `base_url`, which must be the final
/// (post-redirect) URL of the page. The result is deduplicated and sorted.
///
/// # Link Rules
///
/// **Skipped:**
/// - empty hrefs and same-page anchors (`#...`)
/// - `mailto:`, `tel:`, `javascript:` and `data:` links
/// - paths ending in a non-document extension (images, archives, media,
///   stylesheets, scripts, office documents, pdf)
/// - pagination links (`?page=`, `?p=`)
/// - anything that does not resolve to `http` or `https`
///
/// Fragments are stripped from every kept link.
///
/// # Example
///
/// ```
/// use scraper::Html;
/// use sitegraph::crawler::extract_links;
/// use url::Url;
///
/// let html = Html::parse_document(r#"<a href="/b">B</a><a href="/a#top">A</a><a href="mailto:x@y.z">M</a>"#);
/// let base = Url::parse("https://example.org/").unwrap();
/// assert_eq!(
///     extract_links(&html, &base),
///     vec!["https://example.org/a", "https://example.org/b"]
/// );
/// ```
pub fn extract_links(document: &Html, base_url: &Url) -> Vec<String> {
    let mut links = BTreeSet::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_link(href, base_url) {
                    links.insert(absolute_url);
                }
            }
        }
    }

    links.into_iter().collect()
}

/// Resolves one href to an absolute link, or `None` if it should be skipped
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lowered = href.to_lowercase();

    if SKIPPED_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme)) {
        return None;
    }

    if has_non_document_extension(&lowered) {
        return None;
    }

    if PAGINATION_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return None;
    }

    let mut absolute_url = base_url.join(href).ok()?;
    if absolute_url.scheme() != "http" && absolute_url.scheme() != "https" {
        return None;
    }

    absolute_url.set_fragment(None);
    Some(absolute_url.to_string())
}

/// Checks the path part of a lower-cased href against the extension list
fn has_non_document_extension(lowered_href: &str) -> bool {
    let path = lowered_href
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or_default();

    NON_DOCUMENT_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
