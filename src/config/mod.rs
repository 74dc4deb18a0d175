//! Configuration module for the scrape service
//!
//! This module provides the `ScrapeConfig` struct and its builder
//! for configuring browser launch, extraction, image and sitemap settings
//! with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::ScrapeConfigBuilder;
pub use types::{
    BrowserLaunchConfig, DeploymentProfile, ExtractionConfig, ImageConfig, OgImageWait,
    ScrapeConfig, SitemapConfig,
};
