/// Canonicalizes a discovered link for the post-crawl dedup pass
///
/// # Normalization Steps
///
/// 1. Drop the query string (everything from the first `?`)
/// 2. Strip trailing slashes
/// 3. Lowercase the whole URL
///
/// The steps run in this order so the function is idempotent: its output
/// never contains a `?` or a trailing `/`.
///
/// # Examples
///
/// ```
/// use sitegraph::url::canonical_link;
///
/// assert_eq!(canonical_link("https://Example.org/News/?id=3"), "https://example.org/news");
/// assert_eq!(canonical_link("https://example.org/"), "https://example.org");
/// ```
pub fn canonical_link(link: &str) -> String {
    let without_query = match link.find('?') {
        Some(idx) => &link[..idx],
        None => link,
    };

    without_query.trim_end_matches('/').to_lowercase()
}

/// Trims trailing slashes from the seed URL
///
/// This is the form reported as `root` in exports.
pub fn trim_seed(seed: &str) -> String {
    seed.trim().trim_end_matches('/').to_string()
}
