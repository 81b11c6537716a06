//! URL handling module for sitegraph
//!
//! This module provides registrable-domain resolution, prefix matching,
//! link canonicalization, and the scope policy that decides which URLs the
//! crawler may fetch.

mod domain;
mod matcher;
mod normalize;

use crate::config::Config;
use crate::state::VisitedSet;

// Re-export main functions
pub use domain::{extract_domain, network_location, registrable_domain};
pub use matcher::{matches_any_prefix, matches_prefix};
pub use normalize::{canonical_link, trim_seed};

/// Outcome of evaluating a URL against the scope policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeDecision {
    /// URL may be fetched
    Admitted,
    /// The page budget is spent; nothing else is admitted
    BudgetExhausted,
    /// URL was already processed in this run
    AlreadyVisited,
    /// URL does not start with the confinement prefix
    OutsidePrefix,
    /// URL starts with an exclusion prefix
    Excluded,
    /// URL's registrable domain differs from the seed's, or could not be resolved
    ForeignDomain,
}

impl ScopeDecision {
    /// Returns true if the URL may be fetched
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted)
    }

    /// Returns true if the rejection depends only on configuration
    ///
    /// Static rejections hold for the whole run; the others depend on how
    /// far the traversal has progressed.
    pub fn is_static_rejection(&self) -> bool {
        matches!(
            self,
            Self::OutsidePrefix | Self::Excluded | Self::ForeignDomain
        )
    }
}

/// Decides whether a candidate URL may be fetched or followed
///
/// The policy is a pure predicate over static configuration plus the
/// current visited set; it never mutates anything.
#[derive(Debug, Clone)]
pub struct ScopePolicy {
    max_pages: Option<usize>,
    confine_prefix: Option<String>,
    exclude: Vec<String>,
    same_domain: bool,
    /// Registrable domain of the seed; `None` if it could not be resolved
    seed_domain: Option<String>,
}

impl ScopePolicy {
    /// Builds the policy for a crawl configuration
    pub fn new(config: &Config) -> Self {
        let seed_domain = match registrable_domain(&config.seed) {
            Ok(domain) => Some(domain),
            Err(e) => {
                if config.scope.same_domain {
                    tracing::warn!(
                        "Seed {} has no registrable domain ({}); same-domain scope will reject every URL",
                        config.seed,
                        e
                    );
                }
                None
            }
        };

        Self {
            max_pages: config.crawler.page_budget(),
            confine_prefix: config.scope.confine_prefix.clone(),
            exclude: config.scope.exclude.clone(),
            same_domain: config.scope.same_domain,
            seed_domain,
        }
    }

    /// Evaluates a URL against every scope rule
    ///
    /// Rules are checked in this order, first failure wins:
    /// 1. Page budget
    /// 2. Visited set
    /// 3. Confinement prefix
    /// 4. Exclusion prefixes
    /// 5. Same registrable domain
    pub fn evaluate(&self, url: &str, visited: &VisitedSet) -> ScopeDecision {
        if self.budget_exhausted(visited.len()) {
            return ScopeDecision::BudgetExhausted;
        }

        if visited.contains(url) {
            return ScopeDecision::AlreadyVisited;
        }

        self.evaluate_static(url)
    }

    /// Returns true if the URL may be fetched
    pub fn admit(&self, url: &str, visited: &VisitedSet) -> bool {
        self.evaluate(url, visited).is_admitted()
    }

    /// Evaluates only the configuration-driven rules (3 to 5)
    pub fn evaluate_static(&self, url: &str) -> ScopeDecision {
        if let Some(prefix) = &self.confine_prefix {
            if !matches_prefix(prefix, url) {
                return ScopeDecision::OutsidePrefix;
            }
        }

        if matches_any_prefix(&self.exclude, url) {
            return ScopeDecision::Excluded;
        }

        if self.same_domain && !self.shares_seed_domain(url) {
            return ScopeDecision::ForeignDomain;
        }

        ScopeDecision::Admitted
    }

    /// Returns true once `visited_count` has reached the page budget
    pub fn budget_exhausted(&self, visited_count: usize) -> bool {
        matches!(self.max_pages, Some(max) if visited_count >= max)
    }

    fn shares_seed_domain(&self, url: &str) -> bool {
        match (&self.seed_domain, registrable_domain(url)) {
            (Some(seed), Ok(candidate)) => *seed == candidate,
            _ => false,
        }
    }
}
