/// Checks if a URL starts with a plain string prefix
///
/// Prefixes are compared byte for byte: no normalization, no case folding.
/// `https://example.org/docs` therefore also matches
/// `https://example.org/docs-archive`.
///
/// # Examples
///
/// ```
/// use sitegraph::url::matches_prefix;
///
/// assert!(matches_prefix("https://example.org/docs", "https://example.org/docs/intro"));
/// assert!(!matches_prefix("https://example.org/docs", "http://example.org/docs/intro"));
/// ```
pub fn matches_prefix(prefix: &str, candidate: &str) -> bool {
    candidate.starts_with(prefix)
}

/// Checks if a URL starts with any of the given prefixes
pub fn matches_any_prefix<S: AsRef<str>>(prefixes: &[S], candidate: &str) -> bool {
    prefixes
        .iter()
        .any(|prefix| matches_prefix(prefix.as_ref(), candidate))
}
