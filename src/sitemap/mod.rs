//! Sitemap discovery
//!
//! Resolves a site base URL into the ordered list of page URLs to crawl,
//! trying `/sitemap-0.xml` first and `/sitemap.xml` as the single fallback.

pub mod errors;
pub mod parser;

pub use errors::SitemapError;
pub use parser::parse_sitemap;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::SitemapConfig;
use crate::utils::constants::{CHROME_USER_AGENT, SITEMAP_PATHS};
use crate::utils::sitemap_url;

/// Fetches and parses sitemaps over HTTP
#[derive(Debug, Clone)]
pub struct SitemapResolver {
    client: Client,
}

impl SitemapResolver {
    pub fn new(config: &SitemapConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(CHROME_USER_AGENT)
            .timeout(config.timeout())
            .build()
            .context("Failed to build sitemap HTTP client")?;

        Ok(Self { client })
    }

    /// Resolve `base_url` into page URLs in sitemap document order
    ///
    /// # Errors
    /// * `SitemapError::NotFound` - both sitemap paths failed
    /// * `SitemapError::Empty` - the sitemap listed no URLs
    /// * `SitemapError::Parse` - the fetched body is not a sitemap document
    pub async fn resolve(&self, base_url: &str) -> Result<Vec<String>, SitemapError> {
        let (source, body) = self.fetch_first_available(base_url).await?;

        let urls = parse_sitemap(&body).map_err(|e| SitemapError::Parse {
            url: source.clone(),
            message: e.to_string(),
        })?;

        if urls.is_empty() {
            warn!("Sitemap {source} contains no URLs");
            return Err(SitemapError::Empty);
        }

        info!("Resolved {} URLs from {source}", urls.len());
        Ok(urls)
    }

    /// Try each sitemap path in order, returning the first successful body
    async fn fetch_first_available(
        &self,
        base_url: &str,
    ) -> Result<(String, String), SitemapError> {
        for path in SITEMAP_PATHS {
            let url = sitemap_url(base_url, path);
            match self.fetch_text(&url).await {
                Ok(body) => return Ok((url, body)),
                Err(e) => debug!("Sitemap candidate unavailable: {e:#}"),
            }
        }

        warn!("No sitemap found under {base_url}");
        Err(SitemapError::NotFound)
    }

    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {url}"))?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Received status {} for {url}",
                response.status()
            ));
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read body of {url}"))
    }
}
