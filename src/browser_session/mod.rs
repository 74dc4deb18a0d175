//! Controllable browser sessions
//!
//! A crawl talks to the browser only through [`PageSession`], and gets one
//! from a [`SessionLauncher`]. The Chromium implementation lives in
//! [`chromium`]; tests substitute scripted sessions.

pub mod chromium;
pub mod cleanup;

pub use chromium::{ChromiumLauncher, ChromiumSession};
pub use cleanup::{CleanupResult, cleanup_browser_and_data};

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// One browser page that is navigated repeatedly by a single crawl
///
/// Methods take `&mut self`: a page is never shared between concurrent
/// navigations.
#[async_trait]
pub trait PageSession: Send {
    /// Navigate to `url` and wait for the load lifecycle event
    async fn navigate(&mut self, url: &str, timeout: Duration) -> Result<()>;

    /// Poll for an element matching `selector`; `false` once `timeout` elapses
    async fn wait_for_selector(&mut self, selector: &str, timeout: Duration) -> bool;

    /// Evaluate a script in the page and return its JSON result
    async fn evaluate(&mut self, script: &str) -> Result<serde_json::Value>;

    /// Release the page and its browser. Safe to call more than once.
    async fn close(&mut self) -> Result<()>;
}

/// Acquires a fresh [`PageSession`] for one crawl
#[async_trait]
pub trait SessionLauncher: Send + Sync {
    async fn launch(&self) -> Result<Box<dyn PageSession>>;
}
