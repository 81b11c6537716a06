//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the traversal engine that coordinates one crawl run:
//! - Seeding and consuming the BFS frontier
//! - Applying the scope policy before fetching and when enqueueing
//! - Coordinating fetching, link discovery and content extraction
//! - Normalizing the discovered graph once traversal ends

use crate::config::{compute_config_hash, validate, Config};
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchedPage};
use crate::crawler::parser::extract_links;
use crate::crawler::report::CrawlReport;
use crate::crawler::scheduler::{Frontier, Throttle};
use crate::extractor::ContentExtractor;
use crate::state::{CrawlPhase, CrawlState};
use crate::url::{trim_seed, ScopePolicy};
use crate::{Result, SitegraphError};
use chrono::{DateTime, Utc};
use reqwest::Client;
use scraper::Html;
use std::time::Instant;
use url::Url;

/// Progress is logged every this many fetches
const PROGRESS_INTERVAL: u64 = 10;

/// Breadth-first traversal engine for one crawl run
///
/// Owns every collection the run produces; two `Crawler`s never share
/// state, so independent runs can proceed side by side in one process.
pub struct Crawler {
    config: Config,
    config_hash: String,
    root: String,
    client: Client,
    scope: ScopePolicy,
    frontier: Frontier,
    throttle: Throttle,
    extractor: Option<ContentExtractor>,
    state: CrawlState,
    phase: CrawlPhase,
    fetches: u64,
    total_links: usize,
    unique_links: usize,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl Crawler {
    /// Creates a crawler for a configuration
    ///
    /// The configuration is validated here, so an invalid one fails before
    /// anything is fetched.
    ///
    /// # Errors
    ///
    /// * `SitegraphError::Config` - invalid settings or content selectors
    /// * `SitegraphError::Reqwest` - the HTTP client could not be built
    pub fn new(config: Config) -> Result<Self> {
        validate(&config)?;

        let client = build_http_client(&config.crawler)?;
        let extractor = if config.extraction.enabled {
            Some(ContentExtractor::new(&config.extraction)?)
        } else {
            None
        };

        Ok(Self {
            config_hash: compute_config_hash(&config),
            root: trim_seed(&config.seed),
            scope: ScopePolicy::new(&config),
            throttle: Throttle::from_secs_f64(config.crawler.delay),
            frontier: Frontier::new(),
            state: CrawlState::new(),
            phase: CrawlPhase::Idle,
            fetches: 0,
            total_links: 0,
            unique_links: 0,
            started_at: None,
            finished_at: None,
            client,
            extractor,
            config,
        })
    }

    pub fn phase(&self) -> CrawlPhase {
        self.phase
    }

    pub fn state(&self) -> &CrawlState {
        &self.state
    }

    /// Seed URL as recorded in reports
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Runs the crawl to completion
    ///
    /// 1. Seeds the frontier with the root at depth 0
    /// 2. Pops entries in FIFO order until the frontier is empty or the
    ///    page budget is spent
    /// 3. Normalizes and deduplicates the discovered links
    ///
    /// Page-level failures are recorded, never returned. A crawler runs
    /// once; calling `run` again is an invalid transition.
    pub async fn run(&mut self) -> Result<()> {
        self.transition(CrawlPhase::Running)?;
        self.started_at = Some(Utc::now());

        tracing::info!(
            "Starting crawl of {} (depth {}, config {})",
            self.root,
            self.config.crawler.depth,
            short_hash(&self.config_hash)
        );

        self.frontier.push(self.root.clone(), 0);
        let start_time = Instant::now();

        while let Some(entry) = self.frontier.pop() {
            if entry.depth > self.config.crawler.depth {
                tracing::trace!("Skipping {} beyond depth limit", entry.url);
                continue;
            }

            let decision = self.scope.evaluate(&entry.url, self.state.visited());
            if !decision.is_admitted() {
                tracing::trace!("Skipping {}: {:?}", entry.url, decision);
                continue;
            }

            self.throttle.wait().await;

            tracing::debug!("Fetching {} (depth {})", entry.url, entry.depth);
            let result = fetch_url(&self.client, &entry.url).await;
            self.fetches += 1;

            match result {
                Ok(page) => self.process_page(page, entry.depth),
                Err(e) => {
                    tracing::warn!("{}", e);
                    self.state.record_failure(&entry.url, e.to_string());
                }
            }

            if self.fetches % PROGRESS_INTERVAL == 0 {
                let elapsed = start_time.elapsed().as_secs_f64();
                let rate = if elapsed > 0.0 {
                    self.fetches as f64 / elapsed
                } else {
                    0.0
                };
                tracing::info!(
                    "Progress: {} pages visited, {} in frontier, {:.2} pages/sec",
                    self.state.visited().len(),
                    self.frontier.len(),
                    rate
                );
            }

            if self.scope.budget_exhausted(self.state.visited().len()) {
                let dropped = self.frontier.discard_remaining();
                tracing::info!(
                    "Page budget of {} reached, dropping {} queued URLs",
                    self.state.visited().len(),
                    dropped
                );
                break;
            }
        }

        self.transition(CrawlPhase::Draining)?;
        self.drain();

        self.transition(CrawlPhase::Done)?;
        self.finished_at = Some(Utc::now());

        tracing::info!(
            "Crawl finished: {} pages visited, {} errors, {} unique links",
            self.state.visited().len(),
            self.state.errors().len(),
            self.unique_links
        );

        Ok(())
    }

    /// Consumes the crawler, returning its results
    pub fn into_report(self) -> CrawlReport {
        let started_at = self.started_at.unwrap_or_else(Utc::now);
        let finished_at = self.finished_at.unwrap_or(started_at);
        let parts = self.state.into_parts();

        CrawlReport {
            root: self.root,
            config: self.config,
            config_hash: self.config_hash,
            visited: parts.visited,
            pages: parts.discovered,
            errors: parts.errors,
            content: parts.content,
            depth_counts: parts.depth_counts,
            non_html_pages: parts.non_html_pages,
            fetches: self.fetches,
            total_links: self.total_links,
            unique_links: self.unique_links,
            started_at,
            finished_at,
        }
    }

    /// Handles a successful response
    fn process_page(&mut self, page: FetchedPage, depth: u32) {
        let final_url = page.final_url.as_str();

        if page.was_redirected() {
            tracing::debug!("{} redirected to {}", page.requested_url, final_url);
        }

        if self.state.has_page(final_url) {
            tracing::debug!("{} already recorded, ignoring response", final_url);
            return;
        }

        let final_scope = self.scope.evaluate_static(final_url);
        if final_scope.is_static_rejection() {
            tracing::debug!(
                "Redirect target {} out of scope ({:?}), not following",
                final_url,
                final_scope
            );
            self.state.record_page(final_url, Vec::new(), depth);
            return;
        }

        let body = match (&page.body, page.is_html()) {
            (Some(body), true) => body,
            _ => {
                tracing::debug!("{} is not HTML ({})", final_url, page.content_type);
                self.state.record_non_html(final_url, depth);
                return;
            }
        };

        let links = match self.process_html(final_url, body, depth) {
            Ok(links) => links,
            Err(e) => {
                tracing::warn!("{}", e);
                self.state.record_failure(final_url, e.to_string());
                return;
            }
        };

        let next_depth = depth + 1;
        if next_depth > self.config.crawler.depth {
            return;
        }

        for link in links {
            if self.scope.admit(&link, self.state.visited()) {
                self.frontier.push(link, next_depth);
            }
        }
    }

    /// Parses an HTML page, records it and returns its in-scope links
    ///
    /// Kept synchronous so the parsed document never lives across an await.
    fn process_html(&mut self, final_url: &str, body: &str, depth: u32) -> Result<Vec<String>> {
        let base_url = Url::parse(final_url)?;
        let document = Html::parse_document(body);

        let links: Vec<String> = extract_links(&document, &base_url)
            .into_iter()
            .filter(|link| self.scope.evaluate_static(link).is_admitted())
            .collect();

        self.total_links += links.len();
        self.state.record_page(final_url, links.clone(), depth);

        if let Some(extractor) = &self.extractor {
            let record = extractor.extract_record(&document, final_url);
            self.state.record_content(final_url, record);
        }

        Ok(links)
    }

    /// Normalizes every recorded link list against one global seen-set
    fn drain(&mut self) {
        self.unique_links = self.state.normalize_links();
        tracing::debug!(
            "Normalized {} recorded links into {} unique links",
            self.total_links,
            self.unique_links
        );
    }

    fn transition(&mut self, to: CrawlPhase) -> Result<()> {
        if !self.phase.can_transition_to(to) {
            return Err(SitegraphError::InvalidTransition {
                from: self.phase,
                to,
            });
        }
        tracing::trace!("Crawl phase {} -> {}", self.phase, to);
        self.phase = to;
        Ok(())
    }
}

fn short_hash(hash: &str) -> &str {
    hash.get(..12).unwrap_or(hash)
}
