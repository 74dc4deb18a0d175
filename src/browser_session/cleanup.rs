//! Browser and resource cleanup functionality

use anyhow::Result;
use chromiumoxide::Browser;
use log::{debug, warn};
use std::path::Path;

/// Result of cleanup operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupResult {
    /// All cleanup operations succeeded
    Success,
    /// Some cleanup operations failed, with error details
    PartialFailure(Vec<String>),
}

/// Close the browser, wait for the process to exit, then remove its profile
///
/// Order matters: Chrome holds file handles in the profile until it exits.
pub async fn cleanup_browser_and_data(
    browser: &mut Browser,
    chrome_data_dir: &Path,
) -> Result<CleanupResult> {
    let mut errors = Vec::new();

    debug!(target: "og_sitemap_stream::cleanup", "Closing browser");
    if let Err(e) = browser.close().await {
        warn!(target: "og_sitemap_stream::cleanup", "Failed to close browser: {e}");
        errors.push(format!("Browser close failed: {e}"));
    }

    // Wait for browser process to fully exit (prevents "not closed manually" warning)
    if let Err(e) = browser.wait().await {
        warn!(target: "og_sitemap_stream::cleanup", "Failed to wait for browser exit: {e}");
        errors.push(format!("Browser wait failed: {e}"));
    } else {
        debug!(target: "og_sitemap_stream::cleanup", "Browser process exited");
    }

    if let Err(e) = remove_profile_dir(chrome_data_dir) {
        warn!(target: "og_sitemap_stream::cleanup", "Failed to clean up Chrome data directory: {e}");
        errors.push(format!("Directory cleanup failed: {e}"));
    }

    if errors.is_empty() {
        Ok(CleanupResult::Success)
    } else {
        Ok(CleanupResult::PartialFailure(errors))
    }
}

/// Remove a Chrome profile directory; a directory that is already gone is fine
pub(crate) fn remove_profile_dir(path: &Path) -> std::io::Result<()> {
    match std::fs::remove_dir_all(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
