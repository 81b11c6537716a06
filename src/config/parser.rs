use crate::config::types::Config;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// The file may omit any section or key; missing values take their defaults.
/// The seed URL is usually supplied on the command line, so the loaded
/// configuration is *not* validated here. Call [`validate`](crate::config::validate) once all
/// overrides are applied.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use sitegraph::config::load_config;
///
/// let config = load_config(Path::new("crawl.toml")).unwrap();
/// println!("Max depth: {}", config.crawler.depth);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses a configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    Ok(config)
}

/// Computes a SHA-256 fingerprint of the effective configuration
///
/// Two runs with the same fingerprint were started with identical settings.
///
/// # Returns
///
/// Hex-encoded SHA-256 hash of the configuration serialized as JSON
pub fn compute_config_hash(config: &Config) -> String {
    // Serializing plain data into a String cannot fail.
    let serialized = serde_json::to_string(config).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(serialized.as_bytes());
    hex::encode(hasher.finalize())
}
