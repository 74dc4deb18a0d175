//! Test utilities shared by the og_sitemap_stream integration tests
//!
//! Provides a scripted browser session so crawls run without Chromium, plus
//! sitemap and image fixtures for `mockito`.

#![allow(dead_code)]

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use og_sitemap_stream::browser_session::{PageSession, SessionLauncher};
use og_sitemap_stream::config::{OgImageWait, ScrapeConfig};
use og_sitemap_stream::page_extractor::MetadataExtractor;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How a scripted URL behaves when navigated to
#[derive(Debug, Clone)]
pub enum FakePage {
    /// Loads; each `None` tag is absent from the markup
    Tags {
        title: Option<String>,
        description: Option<String>,
        image: Option<String>,
    },
    /// Navigation always fails
    Unreachable,
    /// Navigation fails this many times, then the page loads with a title
    Flaky { failures: usize, title: String },
}

impl FakePage {
    pub fn full(title: &str, description: &str, image: &str) -> Self {
        Self::Tags {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            image: Some(image.to_string()),
        }
    }

    pub fn bare() -> Self {
        Self::Tags {
            title: None,
            description: None,
            image: None,
        }
    }
}

/// Everything the fake sessions did, shared with the test
#[derive(Debug, Default)]
pub struct SessionLog {
    pub launches: AtomicUsize,
    pub closes: AtomicUsize,
    pub navigations: Mutex<Vec<String>>,
}

impl SessionLog {
    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn launches(&self) -> usize {
        self.launches.load(Ordering::SeqCst)
    }
}

/// Scripted set of pages keyed by URL
#[derive(Debug, Clone, Default)]
pub struct FakeSite {
    pages: HashMap<String, FakePage>,
    /// Artificial navigation latency
    delay: Option<Duration>,
}

impl FakeSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, page: FakePage) -> Self {
        self.pages.insert(url.to_string(), page);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

pub struct FakeSession {
    site: FakeSite,
    log: Arc<SessionLog>,
    current: Option<String>,
    attempts: HashMap<String, usize>,
    closed: bool,
}

impl FakeSession {
    fn current_page(&self) -> Option<&FakePage> {
        self.current.as_ref().and_then(|url| self.site.pages.get(url))
    }
}

#[async_trait]
impl PageSession for FakeSession {
    async fn navigate(&mut self, url: &str, _timeout: Duration) -> Result<()> {
        self.log.navigations.lock().unwrap().push(url.to_string());
        if let Some(delay) = self.site.delay {
            tokio::time::sleep(delay).await;
        }

        let attempt = self.attempts.entry(url.to_string()).or_insert(0);
        *attempt += 1;

        match self.site.pages.get(url) {
            Some(FakePage::Tags { .. }) => {}
            Some(FakePage::Flaky { failures, .. }) if *attempt > *failures => {}
            Some(FakePage::Flaky { .. }) => {
                return Err(anyhow!("net::ERR_CONNECTION_RESET at {url}"));
            }
            Some(FakePage::Unreachable) | None => {
                return Err(anyhow!("net::ERR_NAME_NOT_RESOLVED at {url}"));
            }
        }

        self.current = Some(url.to_string());
        Ok(())
    }

    async fn wait_for_selector(&mut self, _selector: &str, _timeout: Duration) -> bool {
        matches!(
            self.current_page(),
            Some(FakePage::Tags { image: Some(_), .. })
        )
    }

    async fn evaluate(&mut self, _script: &str) -> Result<serde_json::Value> {
        let value = |tag: &Option<String>| tag.clone().unwrap_or_else(|| "N/A".to_string());
        match self.current_page() {
            Some(FakePage::Tags {
                title,
                description,
                image,
            }) => Ok(json!({
                "title": value(title),
                "description": value(description),
                "image": value(image),
            })),
            Some(FakePage::Flaky { title, .. }) => Ok(json!({
                "title": title,
                "description": "N/A",
                "image": "N/A",
            })),
            _ => Err(anyhow!("no document loaded")),
        }
    }

    async fn close(&mut self) -> Result<()> {
        if !self.closed {
            self.closed = true;
            self.log.closes.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }
}

/// Hands out `FakeSession`s, or fails every launch
pub struct FakeLauncher {
    site: FakeSite,
    log: Arc<SessionLog>,
    fail: bool,
    launch_delay: Option<Duration>,
}

impl FakeLauncher {
    pub fn new(site: FakeSite) -> (Arc<Self>, Arc<SessionLog>) {
        let log = Arc::new(SessionLog::default());
        let launcher = Arc::new(Self {
            site,
            log: Arc::clone(&log),
            fail: false,
            launch_delay: None,
        });
        (launcher, log)
    }

    pub fn failing() -> (Arc<Self>, Arc<SessionLog>) {
        let log = Arc::new(SessionLog::default());
        let launcher = Arc::new(Self {
            site: FakeSite::new(),
            log: Arc::clone(&log),
            fail: true,
            launch_delay: None,
        });
        (launcher, log)
    }

    pub fn slow(site: FakeSite, launch_delay: Duration) -> (Arc<Self>, Arc<SessionLog>) {
        let log = Arc::new(SessionLog::default());
        let launcher = Arc::new(Self {
            site,
            log: Arc::clone(&log),
            fail: false,
            launch_delay: Some(launch_delay),
        });
        (launcher, log)
    }
}

#[async_trait]
impl SessionLauncher for FakeLauncher {
    async fn launch(&self) -> Result<Box<dyn PageSession>> {
        if let Some(delay) = self.launch_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(anyhow!("Chrome/Chromium executable not found"));
        }
        self.log.launches.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeSession {
            site: self.site.clone(),
            log: Arc::clone(&self.log),
            current: None,
            attempts: HashMap::new(),
            closed: false,
        }))
    }
}

/// Extractor with no waiting between retries
pub fn fast_extractor(policy: OgImageWait) -> MetadataExtractor {
    let config = ScrapeConfig::builder()
        .retry_delay_ms(0)
        .og_image_wait(policy)
        .og_image_wait_secs(0)
        .build()
        .unwrap();
    MetadataExtractor::new(config.extraction().clone())
}

/// `<urlset>` document listing `urls` in order
pub fn sitemap_xml(urls: &[&str]) -> String {
    let entries: String = urls
        .iter()
        .map(|url| format!("  <url><loc>{url}</loc><changefreq>weekly</changefreq></url>\n"))
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{entries}</urlset>\n"
    )
}

/// PNG of the given size
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([12, 120, 200]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

/// Split an SSE body into `(event, data)` pairs, skipping comments
pub fn parse_sse(body: &str) -> Vec<(Option<String>, String)> {
    body.split("\n\n")
        .filter_map(|block| {
            let mut event = None;
            let mut data = Vec::new();
            for line in block.lines() {
                if let Some(name) = line.strip_prefix("event:") {
                    event = Some(name.trim().to_string());
                } else if let Some(value) = line.strip_prefix("data:") {
                    data.push(value.strip_prefix(' ').unwrap_or(value).to_string());
                }
            }
            if data.is_empty() {
                None
            } else {
                Some((event, data.join("\n")))
            }
        })
        .collect()
}
