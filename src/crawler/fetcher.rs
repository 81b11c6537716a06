//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client from crawl settings
//! - GET requests that follow redirects
//! - Content-Type detection
//! - Error classification into [`FetchError`]

use crate::config::CrawlerConfig;
use crate::FetchError;
use reqwest::{header::CONTENT_TYPE, redirect::Policy, Client};
use std::time::Duration;

/// Maximum number of redirect hops followed for one request
pub const MAX_REDIRECTS: usize = 10;

/// Upper bound on the time spent establishing a connection
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// A successful (2xx) response
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL the request was issued for
    pub requested_url: String,

    /// URL after following redirects
    pub final_url: String,

    /// HTTP status code
    pub status: u16,

    /// Content-Type header value, lower-cased; empty if absent
    pub content_type: String,

    /// Decoded body; only read for HTML-like responses
    pub body: Option<String>,
}

impl FetchedPage {
    /// Returns true if the response should be parsed as HTML
    pub fn is_html(&self) -> bool {
        is_probably_html(&self.content_type)
    }

    /// Returns true if the request was redirected elsewhere
    pub fn was_redirected(&self) -> bool {
        self.requested_url != self.final_url
    }
}

/// Returns true for HTML content types and for a missing Content-Type
pub fn is_probably_html(content_type: &str) -> bool {
    let content_type = content_type.to_lowercase();
    content_type.is_empty()
        || content_type.contains("text/html")
        || content_type.contains("application/xhtml+xml")
}

/// Builds an HTTP client from the crawler settings
///
/// The client sends the configured User-Agent, applies the per-request
/// timeout to the whole exchange and follows up to [`MAX_REDIRECTS`]
/// redirects.
///
/// # Example
///
/// ```
/// use sitegraph::config::CrawlerConfig;
/// use sitegraph::crawler::build_http_client;
///
/// let client = build_http_client(&CrawlerConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    let timeout = Duration::from_secs_f64(config.timeout);

    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(timeout)
        .connect_timeout(timeout.min(CONNECT_TIMEOUT))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with a single GET request
///
/// # Request Flow
///
/// 1. Send GET, following redirects
/// 2. Fail on any non-2xx final status
/// 3. Read the body only if the response looks like HTML
///
/// There are no retries: every failure is returned to the caller as-is.
///
/// # Errors
///
/// | Condition | Error |
/// |-----------|-------|
/// | Timeout (request or body) | `FetchError::Timeout` |
/// | Connection refused, DNS, TLS | `FetchError::Connect` |
/// | Non-2xx status | `FetchError::Status` |
/// | Body could not be decoded | `FetchError::Body` |
/// | Anything else (redirect limit, ...) | `FetchError::Request` |
pub async fn fetch_url(client: &Client, url: &str) -> Result<FetchedPage, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .trim()
        .to_lowercase();

    let body = if is_probably_html(&content_type) {
        let text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        })?;
        Some(text)
    } else {
        None
    };

    Ok(FetchedPage {
        requested_url: url.to_string(),
        final_url,
        status: status.as_u16(),
        content_type,
        body,
    })
}

/// Maps a transport error onto a fetch error kind
fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    let url = url.to_string();

    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_connect() {
        FetchError::Connect {
            url,
            message: error.to_string(),
        }
    } else if let Some(status) = error.status() {
        FetchError::Status {
            url,
            status: status.as_u16(),
        }
    } else {
        FetchError::Request {
            url,
            message: error.to_string(),
        }
    }
}
