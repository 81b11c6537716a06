use crate::config::types::{Config, CrawlerConfig, ExtractionConfig, ScopeConfig};
use crate::ConfigError;
use scraper::Selector;
use std::time::Duration;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_seed(&config.seed)?;
    validate_crawler_config(&config.crawler)?;
    validate_scope_config(&config.scope)?;
    validate_extraction_config(&config.extraction)?;
    Ok(())
}

/// Validates the seed URL: absolute, http or https, with a host
fn validate_seed(seed: &str) -> Result<(), ConfigError> {
    if seed.trim().is_empty() {
        return Err(ConfigError::Validation("seed URL cannot be empty".to_string()));
    }

    let url = Url::parse(seed)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' must use http or https",
            seed
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' has no host",
            seed
        )));
    }

    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    // depth >= 0 is always true for u32, so no check needed

    if config.timeout <= 0.0 || Duration::try_from_secs_f64(config.timeout).is_err() {
        return Err(ConfigError::Validation(format!(
            "timeout must be a positive number of seconds, got {}",
            config.timeout
        )));
    }

    if Duration::try_from_secs_f64(config.delay).is_err() {
        return Err(ConfigError::Validation(format!(
            "delay must be >= 0 seconds, got {}",
            config.delay
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates scope prefixes
///
/// An empty prefix matches every URL, which would silently confine or
/// exclude the whole crawl.
fn validate_scope_config(config: &ScopeConfig) -> Result<(), ConfigError> {
    if let Some(prefix) = &config.confine_prefix {
        if prefix.is_empty() {
            return Err(ConfigError::Validation(
                "confine_prefix cannot be empty".to_string(),
            ));
        }
    }

    if config.exclude.iter().any(|p| p.is_empty()) {
        return Err(ConfigError::Validation(
            "exclude prefixes cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates extraction settings: every content selector must parse
fn validate_extraction_config(config: &ExtractionConfig) -> Result<(), ConfigError> {
    for selector in &config.content_selectors {
        Selector::parse(selector)
            .map_err(|e| ConfigError::InvalidSelector(format!("'{}': {:?}", selector, e)))?;
    }

    Ok(())
}
