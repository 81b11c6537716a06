use crate::{UrlError, UrlResult};
use url::{Host, Url};

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// If the URL has no host, it returns None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitegraph::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.ORG/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.org".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns the network location of a URL: host plus explicit port
///
/// This is the `domain` recorded on content records, so
/// `http://127.0.0.1:8080/x` yields `127.0.0.1:8080`.
pub fn network_location(url: &Url) -> String {
    match (extract_domain(url), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host,
        (None, _) => String::new(),
    }
}

/// Resolves the registrable domain (eTLD+1) of a URL string
///
/// The public suffix list decides where the registrable part starts, so
/// `www.example.co.uk` resolves to `example.co.uk`. IP hosts resolve to the
/// address itself.
///
/// # Errors
///
/// * `UrlError::Parse` - the string is not an absolute URL
/// * `UrlError::MissingDomain` - the URL has no host
/// * `UrlError::NoRegistrableDomain` - the host is itself a public suffix
///   or a single label such as `localhost`
///
/// # Examples
///
/// ```
/// use sitegraph::url::registrable_domain;
///
/// assert_eq!(registrable_domain("https://www.example.org/a").unwrap(), "example.org");
/// assert_eq!(registrable_domain("https://a.b.example.co.uk").unwrap(), "example.co.uk");
/// assert!(registrable_domain("not a url").is_err());
/// ```
pub fn registrable_domain(url_str: &str) -> UrlResult<String> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;

    match url.host() {
        Some(Host::Domain(host)) => {
            let host = host.trim_end_matches('.').to_lowercase();
            psl::domain_str(&host)
                .map(|d| d.to_string())
                .ok_or(UrlError::NoRegistrableDomain(host))
        }
        Some(Host::Ipv4(addr)) => Ok(addr.to_string()),
        Some(Host::Ipv6(addr)) => Ok(addr.to_string()),
        None => Err(UrlError::MissingDomain),
    }
}
