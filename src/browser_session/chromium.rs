//! Chromium-backed page sessions
//!
//! Each session owns one browser process, one page, the CDP handler task and
//! a private profile directory. All four are released by `close()`; `Drop`
//! covers the paths where `close()` never ran.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chromiumoxide::{Browser, Page};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::cleanup::{CleanupResult, cleanup_browser_and_data, remove_profile_dir};
use super::{PageSession, SessionLauncher};
use crate::browser_setup::launch_browser;
use crate::config::BrowserLaunchConfig;
use crate::crawl_engine::page_timeout::with_page_timeout;

const SELECTOR_POLL_INTERVAL: Duration = Duration::from_millis(100);

static SESSION_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Unique profile directory per session so concurrent crawls never share a lock
fn session_profile_dir(config: &BrowserLaunchConfig) -> PathBuf {
    let root = config
        .data_dir_root()
        .cloned()
        .unwrap_or_else(std::env::temp_dir);
    let n = SESSION_COUNTER.fetch_add(1, Ordering::Relaxed);
    root.join(format!("og_sitemap_stream_chrome_{}_{n}", std::process::id()))
}

/// Launches one Chromium process per crawl
#[derive(Debug, Clone)]
pub struct ChromiumLauncher {
    config: BrowserLaunchConfig,
}

impl ChromiumLauncher {
    #[must_use]
    pub fn new(config: BrowserLaunchConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl SessionLauncher for ChromiumLauncher {
    async fn launch(&self) -> Result<Box<dyn PageSession>> {
        let user_data_dir = session_profile_dir(&self.config);
        let (mut browser, handler) = match launch_browser(&self.config, &user_data_dir).await {
            Ok(launched) => launched,
            Err(e) => {
                let _ = remove_profile_dir(&user_data_dir);
                return Err(e);
            }
        };

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                warn!("Failed to open page, tearing browser down: {e}");
                let _ = cleanup_browser_and_data(&mut browser, &user_data_dir).await;
                handler.abort();
                return Err(anyhow::anyhow!("Failed to create page: {e}"));
            }
        };

        info!("Browser session ready ({})", user_data_dir.display());
        Ok(Box::new(ChromiumSession {
            browser: Some(browser),
            page,
            handler,
            user_data_dir: Some(user_data_dir),
        }))
    }
}

/// A browser process with the single page every URL of a crawl is loaded into
pub struct ChromiumSession {
    browser: Option<Browser>,
    page: Page,
    handler: JoinHandle<()>,
    user_data_dir: Option<PathBuf>,
}

#[async_trait]
impl PageSession for ChromiumSession {
    async fn navigate(&mut self, url: &str, timeout: Duration) -> Result<()> {
        let page = &self.page;
        with_page_timeout(
            async {
                page.goto(url)
                    .await
                    .map_err(|e| anyhow::anyhow!("{e}"))?;
                page.wait_for_navigation()
                    .await
                    .map_err(|e| anyhow::anyhow!("{e}"))?;
                Ok(())
            },
            timeout,
            "Page navigation",
        )
        .await
    }

    async fn wait_for_selector(&mut self, selector: &str, timeout: Duration) -> bool {
        let start = Instant::now();
        loop {
            if self.page.find_element(selector).await.is_ok() {
                return true;
            }
            if start.elapsed() >= timeout {
                debug!("{selector} not present after {:.1}s", timeout.as_secs_f64());
                return false;
            }
            tokio::time::sleep(SELECTOR_POLL_INTERVAL).await;
        }
    }

    async fn evaluate(&mut self, script: &str) -> Result<serde_json::Value> {
        let result = self
            .page
            .evaluate(script)
            .await
            .context("Failed to execute script")?;

        result
            .into_value::<serde_json::Value>()
            .map_err(|e| anyhow::anyhow!("Failed to read script result: {e}"))
    }

    async fn close(&mut self) -> Result<()> {
        let Some(mut browser) = self.browser.take() else {
            return Ok(());
        };

        if let Err(e) = self.page.clone().close().await {
            debug!("Page close failed (browser close follows): {e}");
        }

        let result = match self.user_data_dir.take() {
            Some(dir) => cleanup_browser_and_data(&mut browser, &dir).await,
            None => Ok(CleanupResult::Success),
        };

        // Abort the handler only after the browser is closed
        self.handler.abort();

        match result? {
            CleanupResult::Success => {
                info!("Browser session closed");
                Ok(())
            }
            CleanupResult::PartialFailure(errors) => {
                warn!("Browser session closed with cleanup failures: {errors:?}");
                Ok(())
            }
        }
    }
}

impl Drop for ChromiumSession {
    fn drop(&mut self) {
        if self.browser.is_some() {
            warn!("ChromiumSession dropped without close() - killing browser");
        }
        self.handler.abort();
        // Browser::drop kills the child process if it is still running
        drop(self.browser.take());

        if let Some(path) = self.user_data_dir.take()
            && let Err(e) = remove_profile_dir(&path)
        {
            warn!(
                "Failed to clean up temp directory {}: {}. Manual cleanup may be required.",
                path.display(),
                e
            );
        }
    }
}
