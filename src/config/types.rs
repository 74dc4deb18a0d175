//! Core configuration types for the scrape service
//!
//! This module contains the main `ScrapeConfig` struct and the per-stage
//! settings it is composed of. A `ScrapeConfig` is resolved once at process
//! start and shared read-only by every request.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::utils::constants::{
    DEFAULT_IMAGE_TIMEOUT_SECS, DEFAULT_IMAGE_WIDTH, DEFAULT_JPEG_QUALITY,
    DEFAULT_MAX_IMAGE_BYTES, DEFAULT_NAVIGATION_ATTEMPTS, DEFAULT_NAVIGATION_RETRY_DELAY_MS,
    DEFAULT_NAVIGATION_TIMEOUT_SECS, DEFAULT_OG_IMAGE_WAIT_SECS, DEFAULT_SITEMAP_TIMEOUT_SECS,
};

/// Where the service runs, which decides the browser launch arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentProfile {
    /// Developer machine with a normal `/dev/shm`
    #[default]
    Local,
    /// Container or serverless host: small `/dev/shm`, no user namespaces
    Container,
}

/// What to do when `meta[property="og:image"]` never appears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OgImageWait {
    /// Wait up to the bounded timeout, then extract whatever is present
    #[default]
    BestEffort,
    /// Wait up to the bounded timeout, then fail the URL
    Required,
}

/// Browser launch settings, resolved once for the whole process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserLaunchConfig {
    pub(crate) headless: bool,
    pub(crate) profile: DeploymentProfile,
    /// Explicit executable; discovery and managed download are skipped when set
    pub(crate) executable: Option<PathBuf>,
    /// Parent directory for per-session Chrome profiles (defaults to temp dir)
    pub(crate) data_dir_root: Option<PathBuf>,
    /// Skip image loads in the page; og:image is read from markup, not pixels
    pub(crate) block_images: bool,
    pub(crate) request_timeout_secs: u64,
    pub(crate) extra_args: Vec<String>,
}

impl Default for BrowserLaunchConfig {
    fn default() -> Self {
        Self {
            headless: true,
            profile: DeploymentProfile::default(),
            executable: None,
            data_dir_root: None,
            block_images: true,
            request_timeout_secs: 30,
            extra_args: Vec::new(),
        }
    }
}

/// Settings for the metadata extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Timeout for one navigation attempt
    pub(crate) navigation_timeout_secs: u64,
    /// Total navigation attempts (1 = no retry)
    pub(crate) navigation_attempts: u8,
    /// Fixed delay between attempts
    pub(crate) retry_delay_ms: u64,
    pub(crate) og_image_wait: OgImageWait,
    pub(crate) og_image_wait_secs: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            navigation_timeout_secs: DEFAULT_NAVIGATION_TIMEOUT_SECS,
            navigation_attempts: DEFAULT_NAVIGATION_ATTEMPTS,
            retry_delay_ms: DEFAULT_NAVIGATION_RETRY_DELAY_MS,
            og_image_wait: OgImageWait::default(),
            og_image_wait_secs: DEFAULT_OG_IMAGE_WAIT_SECS,
        }
    }
}

/// Settings for the optional image post-processing stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    pub(crate) enabled: bool,
    pub(crate) target_width: u32,
    pub(crate) jpeg_quality: u8,
    pub(crate) max_bytes: usize,
    pub(crate) timeout_secs: u64,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            target_width: DEFAULT_IMAGE_WIDTH,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            max_bytes: DEFAULT_MAX_IMAGE_BYTES,
            timeout_secs: DEFAULT_IMAGE_TIMEOUT_SECS,
        }
    }
}

/// Settings for sitemap downloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitemapConfig {
    pub(crate) timeout_secs: u64,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_SITEMAP_TIMEOUT_SECS,
        }
    }
}

/// Main configuration struct for the scrape service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) browser: BrowserLaunchConfig,
    pub(crate) extraction: ExtractionConfig,
    pub(crate) image: ImageConfig,
    pub(crate) sitemap: SitemapConfig,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            browser: BrowserLaunchConfig::default(),
            extraction: ExtractionConfig::default(),
            image: ImageConfig::default(),
            sitemap: SitemapConfig::default(),
        }
    }
}
