//! Crawl execution with stream termination
//!
//! Wraps [`SitemapCrawler::run`] so every stream ends the same way: a close
//! frame after the last result, or an error frame then a close frame when
//! the crawl could not start. Nothing is sent to a consumer that has left.

use log::{error, info};

use super::crawl_types::{CrawlError, CrawlResult, CrawlSummary};
use super::orchestrator::SitemapCrawler;
use crate::crawl_events::{Frame, FrameSink};

/// Run a crawl to completion and terminate the frame stream
pub async fn execute_crawl(
    crawler: &SitemapCrawler,
    urls: &[String],
    sink: &dyn FrameSink,
) -> CrawlResult<CrawlSummary> {
    match crawler.run(urls, sink).await {
        Ok(summary) if summary.cancelled => {
            info!(
                "Crawl stopped after {}/{} URLs, consumer gone",
                summary.processed(),
                summary.total
            );
            Ok(summary)
        }
        Ok(summary) => {
            let _ = sink.emit(Frame::Close).await;
            Ok(summary)
        }
        Err(CrawlError::Cancelled) => Err(CrawlError::Cancelled),
        Err(e) => {
            error!("Crawl failed: {e}");
            let error = match &e {
                CrawlError::BrowserError(_) => "Failed to start browser session",
                _ => "Internal Server Error",
            };
            let frame = Frame::Error {
                error: error.to_string(),
                details: e.to_string(),
            };
            if sink.emit(frame).await.is_ok() {
                let _ = sink.emit(Frame::Close).await;
            }
            Err(e)
        }
    }
}
