//! Getter methods for the configuration types

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use super::types::{
    BrowserLaunchConfig, DeploymentProfile, ExtractionConfig, ImageConfig, OgImageWait,
    ScrapeConfig, SitemapConfig,
};

impl ScrapeConfig {
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    #[must_use]
    pub fn browser(&self) -> &BrowserLaunchConfig {
        &self.browser
    }

    #[must_use]
    pub fn extraction(&self) -> &ExtractionConfig {
        &self.extraction
    }

    #[must_use]
    pub fn image(&self) -> &ImageConfig {
        &self.image
    }

    #[must_use]
    pub fn sitemap(&self) -> &SitemapConfig {
        &self.sitemap
    }
}

impl BrowserLaunchConfig {
    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn profile(&self) -> DeploymentProfile {
        self.profile
    }

    #[must_use]
    pub fn executable(&self) -> Option<&PathBuf> {
        self.executable.as_ref()
    }

    #[must_use]
    pub fn data_dir_root(&self) -> Option<&PathBuf> {
        self.data_dir_root.as_ref()
    }

    #[must_use]
    pub fn block_images(&self) -> bool {
        self.block_images
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn extra_args(&self) -> &[String] {
        &self.extra_args
    }
}

impl ExtractionConfig {
    #[must_use]
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }

    #[must_use]
    pub fn navigation_attempts(&self) -> u8 {
        self.navigation_attempts
    }

    #[must_use]
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    #[must_use]
    pub fn og_image_wait(&self) -> OgImageWait {
        self.og_image_wait
    }

    #[must_use]
    pub fn og_image_timeout(&self) -> Duration {
        Duration::from_secs(self.og_image_wait_secs)
    }
}

impl ImageConfig {
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn target_width(&self) -> u32 {
        self.target_width
    }

    #[must_use]
    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality
    }

    #[must_use]
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl SitemapConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
