//! Navigation and Open Graph tag extraction for a single URL

use log::{debug, warn};

use super::errors::ExtractError;
use super::js_scripts::{OG_IMAGE_SELECTOR, OG_TAGS_SCRIPT};
use super::schema::{OgTags, PageMetadata};
use crate::browser_session::PageSession;
use crate::config::{ExtractionConfig, OgImageWait};

/// Visits one URL on a shared page and reads its Open Graph tags
#[derive(Debug, Clone, Default)]
pub struct MetadataExtractor {
    config: ExtractionConfig,
}

impl MetadataExtractor {
    #[must_use]
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Navigate to `url`, wait per the og:image policy, read the tags
    pub async fn extract(
        &self,
        session: &mut dyn PageSession,
        url: &str,
    ) -> Result<PageMetadata, ExtractError> {
        self.navigate_with_retry(session, url).await?;

        let wait = self.config.og_image_timeout();
        if !session.wait_for_selector(OG_IMAGE_SELECTOR, wait).await {
            match self.config.og_image_wait() {
                OgImageWait::Required => {
                    return Err(ExtractError::MetaTimeout {
                        selector: OG_IMAGE_SELECTOR.to_string(),
                        secs: wait.as_secs(),
                    });
                }
                OgImageWait::BestEffort => {
                    debug!("No og:image on {url}, extracting without it");
                }
            }
        }

        let value = session
            .evaluate(OG_TAGS_SCRIPT)
            .await
            .map_err(|e| ExtractError::Evaluation(format!("{e:#}")))?;

        let tags: OgTags = serde_json::from_value(value)
            .map_err(|e| ExtractError::Evaluation(format!("Unexpected script result: {e}")))?;

        Ok(tags.into_metadata(url))
    }

    /// Fixed attempt count with a fixed delay between attempts
    async fn navigate_with_retry(
        &self,
        session: &mut dyn PageSession,
        url: &str,
    ) -> Result<(), ExtractError> {
        let attempts = self.config.navigation_attempts().max(1);
        let timeout = self.config.navigation_timeout();
        let mut last_error = String::new();

        for attempt in 1..=attempts {
            match session.navigate(url, timeout).await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    last_error = format!("{e:#}");
                    warn!("Navigation to {url} failed (attempt {attempt}/{attempts}): {last_error}");
                    if attempt < attempts {
                        tokio::time::sleep(self.config.retry_delay()).await;
                    }
                }
            }
        }

        Err(ExtractError::Navigation {
            attempts,
            message: last_error,
        })
    }
}
