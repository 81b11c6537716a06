//! sitegraph main entry point
//!
//! This is the command-line interface for the sitegraph site mapper.

use anyhow::Context;
use clap::Parser;
use sitegraph::config::{compute_config_hash, load_config, validate, Config};
use sitegraph::crawler::crawl;
use sitegraph::output::{
    generate_markdown_summary, print_statistics, write_content, write_graph, CrawlStatistics,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// sitegraph: a breadth-first site mapper
///
/// sitegraph crawls a website from a root URL, following links breadth-first
/// within the configured depth and scope, and writes the discovered link
/// graph. Optionally it extracts the main content of every HTML page.
#[derive(Parser, Debug)]
#[command(name = "sitegraph")]
#[command(version)]
#[command(about = "A breadth-first site mapper", long_about = None)]
struct Cli {
    /// Root URL the crawl starts from
    #[arg(value_name = "ROOT")]
    root: String,

    /// Maximum link depth from the root [default: 2]
    #[arg(long, value_name = "N")]
    depth: Option<u32>,

    /// Only follow URLs on the root's registrable domain
    #[arg(long)]
    same_domain: bool,

    /// Only follow URLs starting with this prefix
    #[arg(long, value_name = "PREFIX")]
    confine_prefix: Option<String>,

    /// Never follow URLs starting with this prefix (repeatable)
    #[arg(long, value_name = "PREFIX")]
    exclude: Vec<String>,

    /// Per-request timeout in seconds [default: 7.0]
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<f64>,

    /// Delay before every request in seconds [default: 0.0]
    #[arg(long, value_name = "SECONDS")]
    delay: Option<f64>,

    /// Stop after visiting this many pages (0 means no limit)
    #[arg(long, value_name = "N")]
    max_pages: Option<usize>,

    /// User-Agent header sent with every request
    #[arg(long, value_name = "STRING")]
    ua: Option<String>,

    /// Link graph output (.json, .csv or .dot)
    #[arg(long, value_name = "PATH", default_value = "links.json")]
    out: PathBuf,

    /// Extract the main content of every HTML page
    #[arg(long)]
    extract_content: bool,

    /// Content records output as NDJSON (requires --extract-content)
    #[arg(long, value_name = "PATH")]
    out_content: Option<PathBuf>,

    /// Path to a TOML configuration file; flags override its values
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a markdown summary of the run
    #[arg(long, value_name = "PATH")]
    summary: Option<PathBuf>,

    /// Validate the configuration and print it without crawling
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Builds the effective configuration: file values, then flags
    fn to_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
            None => Config::default(),
        };

        config.seed = self.root.clone();

        if let Some(depth) = self.depth {
            config.crawler.depth = depth;
        }
        if let Some(timeout) = self.timeout {
            config.crawler.timeout = timeout;
        }
        if let Some(delay) = self.delay {
            config.crawler.delay = delay;
        }
        if let Some(max_pages) = self.max_pages {
            config.crawler.max_pages = Some(max_pages);
        }
        if let Some(ua) = &self.ua {
            config.crawler.user_agent = ua.clone();
        }
        if self.same_domain {
            config.scope.same_domain = true;
        }
        if let Some(prefix) = &self.confine_prefix {
            config.scope.confine_prefix = Some(prefix.clone());
        }
        if !self.exclude.is_empty() {
            config.scope.exclude = self.exclude.clone();
        }
        if self.extract_content {
            config.extraction.enabled = true;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = cli.to_config()?;
    validate(&config).context("Invalid configuration")?;
    tracing::info!(
        "Configuration loaded successfully (hash: {})",
        compute_config_hash(&config)
    );

    if cli.out_content.is_some() && !config.extraction.enabled {
        tracing::warn!("--out-content has no effect without --extract-content");
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(config, &cli).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitegraph=info,warn"),
            1 => EnvFilter::new("sitegraph=debug,info"),
            2 => EnvFilter::new("sitegraph=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== sitegraph Dry Run ===\n");

    println!("Root: {}", config.seed);

    println!("\nCrawler:");
    println!("  Max depth: {}", config.crawler.depth);
    println!("  Timeout: {}s", config.crawler.timeout);
    println!("  Delay: {}s", config.crawler.delay);
    match config.crawler.page_budget() {
        Some(max) => println!("  Page budget: {}", max),
        None => println!("  Page budget: unlimited"),
    }
    println!("  User agent: {}", config.crawler.user_agent);

    println!("\nScope:");
    println!("  Same domain: {}", config.scope.same_domain);
    if let Some(prefix) = &config.scope.confine_prefix {
        println!("  Confined to: {}", prefix);
    }
    for prefix in &config.scope.exclude {
        println!("  Excluding: {}", prefix);
    }

    println!("\nContent extraction: {}", config.extraction.enabled);
    if config.extraction.enabled {
        for selector in &config.extraction.content_selectors {
            println!("  - {}", selector);
        }
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation and writes every requested output
async fn handle_crawl(config: Config, cli: &Cli) -> anyhow::Result<()> {
    let report = crawl(config).await.context("Crawl failed")?;

    write_graph(&report, &cli.out)
        .with_context(|| format!("Failed to write {}", cli.out.display()))?;

    if report.config.extraction.enabled {
        if let Some(path) = &cli.out_content {
            write_content(&report, path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
    }

    if let Some(path) = &cli.summary {
        generate_markdown_summary(&report, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Summary written to {}", path.display());
    }

    if !cli.quiet {
        print_statistics(&CrawlStatistics::from_report(&report));
        println!("✓ Link graph written to: {}", cli.out.display());
    }

    Ok(())
}
