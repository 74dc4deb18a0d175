//! Streams Open Graph metadata for every page of a site's sitemap.
//!
//! The pipeline: [`sitemap::SitemapResolver`] turns a base URL into page
//! URLs, [`crawl_engine::SitemapCrawler`] visits them one by one in a single
//! browser session, [`page_extractor::MetadataExtractor`] reads the
//! `og:*` tags, the optional [`image_processor`] inlines a small preview, and
//! every outcome is written to a [`crawl_events::FrameSink`].

pub mod browser_session;
pub mod browser_setup;
pub mod config;
pub mod crawl_engine;
pub mod crawl_events;
pub mod image_processor;
pub mod page_extractor;
pub mod server;
pub mod sitemap;
pub mod utils;

pub use browser_session::{ChromiumLauncher, PageSession, SessionLauncher};
pub use browser_setup::{download_managed_browser, find_browser_executable, launch_browser};
pub use config::{ScrapeConfig, ScrapeConfigBuilder};
pub use crawl_engine::{CrawlError, CrawlResult, CrawlSummary, SitemapCrawler, execute_crawl};
pub use crawl_events::{ChannelSink, CollectingSink, Frame, FrameSink};
pub use image_processor::{ImageOptimizer, ImagePostProcessor};
pub use page_extractor::{MetadataExtractor, PageMetadata, ScrapeResult};
pub use server::{AppState, router};
pub use sitemap::{SitemapError, SitemapResolver};
