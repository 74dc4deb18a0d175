//! Main crawl orchestration logic
//!
//! Coordinates a sitemap crawl with:
//! - One browser session per crawl, released on every exit path
//! - Strictly sequential URL processing on a single page
//! - Per-URL failure isolation
//! - Result and progress frames after every URL
//! - Early stop when the consumer disconnects

use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Instant;

use super::crawl_types::{CrawlError, CrawlResult, CrawlSummary};
use super::progress::ProgressState;
use crate::browser_session::{PageSession, SessionLauncher};
use crate::crawl_events::{Frame, FrameSink};
use crate::image_processor::{ImagePostProcessor, apply_post_processor};
use crate::page_extractor::{MetadataExtractor, ScrapeResult};

/// Visits every sitemap entry in order and reports each outcome
#[derive(Clone)]
pub struct SitemapCrawler {
    launcher: Arc<dyn SessionLauncher>,
    extractor: MetadataExtractor,
    image_processor: Option<Arc<dyn ImagePostProcessor>>,
}

impl SitemapCrawler {
    #[must_use]
    pub fn new(launcher: Arc<dyn SessionLauncher>, extractor: MetadataExtractor) -> Self {
        Self {
            launcher,
            extractor,
            image_processor: None,
        }
    }

    /// Enable the image post-processing stage
    #[must_use]
    pub fn with_image_processor(mut self, processor: Arc<dyn ImagePostProcessor>) -> Self {
        self.image_processor = Some(processor);
        self
    }

    /// Crawl `urls` in order, writing result and progress frames to `sink`
    ///
    /// Does not emit the close frame; see [`execute_crawl`](super::execute_crawl).
    ///
    /// # Errors
    /// * `CrawlError::BrowserError` - the session could not be acquired
    /// * `CrawlError::Cancelled` - the consumer left while the session was starting
    pub async fn run(&self, urls: &[String], sink: &dyn FrameSink) -> CrawlResult<CrawlSummary> {
        let start_time = Instant::now();
        info!("Starting crawl of {} URLs", urls.len());

        let launched = tokio::select! {
            biased;
            () = sink.closed() => {
                info!("Consumer disconnected before the browser session was ready");
                return Err(CrawlError::Cancelled);
            }
            launched = self.launcher.launch() => launched,
        };
        let mut session =
            launched.map_err(|e| CrawlError::BrowserError(format!("{e:#}")))?;

        let mut summary = CrawlSummary {
            total: urls.len(),
            succeeded: 0,
            failed: 0,
            cancelled: false,
            duration: start_time.elapsed(),
        };

        self.crawl_urls(session.as_mut(), urls, sink, &mut summary)
            .await;

        if let Err(e) = session.close().await {
            warn!("Failed to close browser session: {e:#}");
        }

        summary.duration = start_time.elapsed();
        info!(
            "Crawl finished: {} succeeded, {} failed, cancelled: {}, took {:.2}s",
            summary.succeeded,
            summary.failed,
            summary.cancelled,
            summary.duration.as_secs_f64()
        );
        Ok(summary)
    }

    async fn crawl_urls(
        &self,
        session: &mut dyn PageSession,
        urls: &[String],
        sink: &dyn FrameSink,
        summary: &mut CrawlSummary,
    ) {
        let mut progress = ProgressState::new(urls.len());

        for url in urls {
            let result = tokio::select! {
                biased;
                () = sink.closed() => {
                    info!("Consumer disconnected while processing {url}");
                    summary.cancelled = true;
                    return;
                }
                result = self.process_url(&mut *session, url) => result,
            };

            if result.is_success() {
                summary.succeeded += 1;
            } else {
                summary.failed += 1;
            }

            if sink.emit(Frame::Result(result)).await.is_err() {
                summary.cancelled = true;
                return;
            }

            let percent = progress.record();
            debug!("Progress {percent}% ({}/{})", progress.processed(), progress.total());
            if sink.emit(Frame::Progress(percent)).await.is_err() {
                summary.cancelled = true;
                return;
            }
        }
    }

    /// Terminal result for one URL; never fails the crawl
    async fn process_url(&self, session: &mut dyn PageSession, url: &str) -> ScrapeResult {
        match self.extractor.extract(session, url).await {
            Ok(meta) => {
                let meta = match &self.image_processor {
                    Some(processor) => apply_post_processor(processor.as_ref(), meta).await,
                    None => meta,
                };
                ScrapeResult::Success(meta)
            }
            Err(e) => {
                warn!("Failed to extract {url}: {e}");
                ScrapeResult::failure(url, e)
            }
        }
    }
}
