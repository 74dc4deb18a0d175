//! Fluent builder for `ScrapeConfig`
//!
//! Every field has a default, so the builder starts from
//! `ScrapeConfig::default()` and `build()` only validates ranges.

use anyhow::{Result, bail};
use std::net::SocketAddr;
use std::path::PathBuf;

use super::types::{DeploymentProfile, OgImageWait, ScrapeConfig};

#[derive(Debug, Clone, Default)]
pub struct ScrapeConfigBuilder {
    inner: ScrapeConfig,
}

impl ScrapeConfig {
    /// Create a builder for configuring a `ScrapeConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder {
        ScrapeConfigBuilder::default()
    }
}

impl ScrapeConfigBuilder {
    #[must_use]
    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.inner.bind_addr = addr;
        self
    }

    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.inner.browser.headless = headless;
        self
    }

    #[must_use]
    pub fn deployment_profile(mut self, profile: DeploymentProfile) -> Self {
        self.inner.browser.profile = profile;
        self
    }

    #[must_use]
    pub fn browser_executable(mut self, path: Option<PathBuf>) -> Self {
        self.inner.browser.executable = path;
        self
    }

    #[must_use]
    pub fn chrome_data_root(mut self, dir: Option<PathBuf>) -> Self {
        self.inner.browser.data_dir_root = dir;
        self
    }

    #[must_use]
    pub fn block_images(mut self, block: bool) -> Self {
        self.inner.browser.block_images = block;
        self
    }

    #[must_use]
    pub fn browser_arg(mut self, arg: impl Into<String>) -> Self {
        self.inner.browser.extra_args.push(arg.into());
        self
    }

    #[must_use]
    pub fn navigation_timeout_secs(mut self, secs: u64) -> Self {
        self.inner.extraction.navigation_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn navigation_attempts(mut self, attempts: u8) -> Self {
        self.inner.extraction.navigation_attempts = attempts;
        self
    }

    #[must_use]
    pub fn retry_delay_ms(mut self, ms: u64) -> Self {
        self.inner.extraction.retry_delay_ms = ms;
        self
    }

    #[must_use]
    pub fn og_image_wait(mut self, policy: OgImageWait) -> Self {
        self.inner.extraction.og_image_wait = policy;
        self
    }

    #[must_use]
    pub fn og_image_wait_secs(mut self, secs: u64) -> Self {
        self.inner.extraction.og_image_wait_secs = secs;
        self
    }

    #[must_use]
    pub fn inline_images(mut self, enabled: bool) -> Self {
        self.inner.image.enabled = enabled;
        self
    }

    #[must_use]
    pub fn image_width(mut self, width: u32) -> Self {
        self.inner.image.target_width = width;
        self
    }

    #[must_use]
    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.inner.image.jpeg_quality = quality;
        self
    }

    #[must_use]
    pub fn max_image_bytes(mut self, bytes: usize) -> Self {
        self.inner.image.max_bytes = bytes;
        self
    }

    #[must_use]
    pub fn sitemap_timeout_secs(mut self, secs: u64) -> Self {
        self.inner.sitemap.timeout_secs = secs;
        self
    }

    pub fn build(self) -> Result<ScrapeConfig> {
        let config = self.inner;

        if config.extraction.navigation_attempts == 0 {
            bail!("navigation_attempts must be at least 1");
        }
        if config.extraction.navigation_timeout_secs == 0 {
            bail!("navigation_timeout_secs must be greater than 0");
        }
        if config.sitemap.timeout_secs == 0 {
            bail!("sitemap_timeout_secs must be greater than 0");
        }
        if config.image.target_width == 0 {
            bail!("image width must be greater than 0");
        }
        if !(1..=100).contains(&config.image.jpeg_quality) {
            bail!(
                "jpeg_quality must be between 1 and 100, got {}",
                config.image.jpeg_quality
            );
        }

        // Enforce headless mode in release builds for production safety
        #[cfg(not(debug_assertions))]
        let config = {
            let mut config = config;
            if !config.browser.headless {
                tracing::warn!("Headed browser requested in a release build; forcing headless");
                config.browser.headless = true;
            }
            config
        };

        Ok(config)
    }
}
