/// Crawl phase definitions for the traversal engine
///
/// A crawl moves strictly forward through these phases; it never goes back.
use std::fmt;

/// Represents the lifecycle phase of one crawl run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CrawlPhase {
    /// Engine built, nothing fetched yet
    #[default]
    Idle,

    /// Frontier is being consumed
    Running,

    /// Traversal finished; outbound link lists are being normalized
    Draining,

    /// Terminal: results are ready for export
    Done,
}

impl CrawlPhase {
    /// Returns true if the engine may move from `self` to `next`
    pub fn can_transition_to(&self, next: CrawlPhase) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Running)
                | (Self::Running, Self::Draining)
                | (Self::Draining, Self::Done)
        )
    }

    /// Returns true if this is the terminal phase
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Short lowercase name used in logs and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Draining => "draining",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for CrawlPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
