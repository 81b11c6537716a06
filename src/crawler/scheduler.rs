//! Frontier queue and request pacing
//!
//! This module handles:
//! - FIFO frontier management for breadth-first traversal
//! - The fixed politeness delay applied before every fetch

use std::collections::VecDeque;
use std::time::Duration;

/// A URL waiting to be fetched, with its BFS depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    /// The URL to fetch
    pub url: String,

    /// Distance from the seed, in links
    pub depth: u32,
}

impl FrontierEntry {
    pub fn new(url: impl Into<String>, depth: u32) -> Self {
        Self {
            url: url.into(),
            depth,
        }
    }
}

/// Breadth-first frontier
///
/// Entries are consumed in insertion order, so every page at depth `d` is
/// fetched before any page at depth `d + 1`.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<FrontierEntry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry to the back of the queue
    pub fn push(&mut self, url: impl Into<String>, depth: u32) {
        self.queue.push_back(FrontierEntry::new(url, depth));
    }

    /// Removes the oldest entry
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drops every queued entry, returning how many there were
    pub fn discard_remaining(&mut self) -> usize {
        let remaining = self.queue.len();
        self.queue.clear();
        remaining
    }
}

/// Fixed delay applied before each request
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    delay: Duration,
}

impl Throttle {
    /// Creates a throttle from a delay in seconds; non-positive means none
    pub fn from_secs_f64(seconds: f64) -> Self {
        let delay = if seconds.is_finite() && seconds > 0.0 {
            Duration::from_secs_f64(seconds)
        } else {
            Duration::ZERO
        };
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sleeps for the configured delay
    pub async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
