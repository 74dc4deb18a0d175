//! Route handlers

use axum::Json;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::sse::{KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use super::AppState;
use super::errors::ApiError;
use crate::crawl_engine::{CrawlError, execute_crawl};
use crate::crawl_events::{ChannelSink, CollectingSink, frame_stream};
use crate::utils::constants::FRAME_CHANNEL_CAPACITY;
use crate::utils::normalize_base_url;

#[derive(Debug, Deserialize)]
pub struct ScrapeQuery {
    pub url: Option<String>,
}

impl ScrapeQuery {
    /// Normalized base URL, rejecting a missing or blank parameter
    pub fn base_url(&self) -> Result<String, ApiError> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(normalize_base_url)
            .ok_or(ApiError::MissingUrl)
    }
}

/// `GET /scrape?url=` - stream one frame per sitemap entry over SSE
pub async fn scrape_stream(
    State(state): State<AppState>,
    Query(query): Query<ScrapeQuery>,
) -> Result<Response, ApiError> {
    let base_url = query.base_url()?;
    let urls = state.resolver.resolve(&base_url).await?;

    let (sink, rx) = ChannelSink::channel(FRAME_CHANNEL_CAPACITY);
    let crawler = state.crawler.clone();
    tokio::spawn(async move {
        match execute_crawl(&crawler, &urls, &sink).await {
            Ok(summary) => info!(
                "Stream for {base_url} done: {}/{} processed",
                summary.processed(),
                summary.total
            ),
            Err(e) => warn!("Stream for {base_url} ended early: {e}"),
        }
    });

    let sse = Sse::new(frame_stream(rx)).keep_alive(KeepAlive::default());
    Ok((
        [
            (header::CACHE_CONTROL, "no-cache"),
            (header::CONNECTION, "keep-alive"),
        ],
        sse,
    )
        .into_response())
}

/// `GET /scrape/batch?url=` - crawl to completion, answer with one JSON body
pub async fn scrape_batch(
    State(state): State<AppState>,
    Query(query): Query<ScrapeQuery>,
) -> Result<Response, ApiError> {
    let base_url = query.base_url()?;
    let urls = state.resolver.resolve(&base_url).await?;

    let sink = CollectingSink::new();
    match execute_crawl(&state.crawler, &urls, &sink).await {
        Ok(_) | Err(CrawlError::Cancelled) => {}
        Err(e) => return Err(ApiError::Internal(e.to_string())),
    }

    Ok(Json(json!({ "results": sink.results() })).into_response())
}

pub async fn health() -> &'static str {
    "ok"
}
