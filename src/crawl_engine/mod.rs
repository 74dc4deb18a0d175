//! Crawl Engine Module
//!
//! Drives one browser session over every URL of a sitemap and reports each
//! outcome as a frame.

// Sub-modules
pub mod crawl_types;
pub mod execution;
pub mod orchestrator;
pub mod page_timeout;
pub mod progress;

// Re-exports for public API
pub use crawl_types::{CrawlError, CrawlResult, CrawlSummary};
pub use execution::execute_crawl;
pub use orchestrator::SitemapCrawler;
pub use page_timeout::with_page_timeout;
pub use progress::ProgressState;
