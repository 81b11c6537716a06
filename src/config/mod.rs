//! Configuration module for sitegraph
//!
//! This module handles loading, parsing, and validating crawl configuration.
//! Settings can come from a TOML file and are overridden by command-line
//! flags; the result is validated once before the crawl starts.
//!
//! # Example
//!
//! ```no_run
//! use sitegraph::config::{load_config, validate};
//! use std::path::Path;
//!
//! let mut config = load_config(Path::new("crawl.toml")).unwrap();
//! config.seed = "https://www.example.org".to_string();
//! validate(&config).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, ExtractionConfig, ScopeConfig, DEFAULT_BOILERPLATE_PREFIXES,
    DEFAULT_CONTENT_SELECTORS, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, parse_config};
pub use validation::validate;
