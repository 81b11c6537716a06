//! Integration tests for sitegraph
//!
//! Each test drives a real `Crawler` against a wiremock server.

mod crawl_tests;
mod export_tests;

use sitegraph::config::Config;
use wiremock::ResponseTemplate;

/// Baseline configuration for a crawl seeded at `seed`
pub fn config_for(seed: &str) -> Config {
    let mut config = Config::default();
    config.seed = seed.to_string();
    config.crawler.timeout = 5.0;
    config
}

/// A 200 response carrying an HTML document with `body` inside `<body>`
pub fn html_page(body: &str) -> ResponseTemplate {
    let document = format!(
        "<!DOCTYPE html><html><head><title>Test</title></head><body>{}</body></html>",
        body
    );
    ResponseTemplate::new(200).set_body_raw(document.into_bytes(), "text/html")
}
