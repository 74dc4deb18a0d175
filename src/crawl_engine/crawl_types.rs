//! Core types for crawl operations.

use std::fmt;
use std::time::Duration;

/// Crawl-level error, distinct from per-URL failures
#[derive(Debug, Clone)]
pub enum CrawlError {
    /// Browser session could not be acquired
    BrowserError(String),
    /// Consumer went away before any URL was processed
    Cancelled,
    /// Other errors
    Other(String),
}

impl fmt::Display for CrawlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BrowserError(msg) => write!(f, "Browser error: {msg}"),
            Self::Cancelled => write!(f, "Crawl operation was cancelled"),
            Self::Other(msg) => write!(f, "Crawl error: {msg}"),
        }
    }
}

impl std::error::Error for CrawlError {}

impl From<anyhow::Error> for CrawlError {
    fn from(err: anyhow::Error) -> Self {
        // Use {:#} to preserve full error chain with context
        Self::Other(format!("{err:#}"))
    }
}

/// Convenience alias for Result with `CrawlError`
pub type CrawlResult<T> = Result<T, CrawlError>;

/// Outcome counters of one crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// The consumer disconnected before every URL was processed
    pub cancelled: bool,
    pub duration: Duration,
}

impl CrawlSummary {
    /// Entries that produced a result frame
    #[must_use]
    pub fn processed(&self) -> usize {
        self.succeeded + self.failed
    }
}
