//! HTTP surface
//!
//! `GET /scrape` (also `/api/scrape`) streams results as server-sent events,
//! `GET /scrape/batch` returns them as one JSON document.

pub mod errors;
pub mod handlers;

pub use errors::ApiError;
pub use handlers::ScrapeQuery;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::Method;
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::browser_session::ChromiumLauncher;
use crate::config::ScrapeConfig;
use crate::crawl_engine::SitemapCrawler;
use crate::image_processor::ImageOptimizer;
use crate::page_extractor::MetadataExtractor;
use crate::sitemap::SitemapResolver;

/// Shared state of every request
#[derive(Clone)]
pub struct AppState {
    pub resolver: SitemapResolver,
    pub crawler: SitemapCrawler,
}

impl AppState {
    #[must_use]
    pub fn new(resolver: SitemapResolver, crawler: SitemapCrawler) -> Self {
        Self { resolver, crawler }
    }

    /// Production wiring: Chromium sessions and the HTTP image optimizer
    pub fn from_config(config: &ScrapeConfig) -> Result<Self> {
        let resolver = SitemapResolver::new(config.sitemap())?;
        let launcher = Arc::new(ChromiumLauncher::new(config.browser().clone()));
        let extractor = MetadataExtractor::new(config.extraction().clone());

        let mut crawler = SitemapCrawler::new(launcher, extractor);
        if config.image().enabled() {
            let optimizer = ImageOptimizer::new(config.image().clone())
                .context("Failed to build image HTTP client")?;
            crawler = crawler.with_image_processor(Arc::new(optimizer));
        }

        Ok(Self::new(resolver, crawler))
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/scrape", get(handlers::scrape_stream))
        .route("/api/scrape", get(handlers::scrape_stream))
        .route("/scrape/batch", get(handlers::scrape_batch))
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: &ScrapeConfig) -> Result<()> {
    let state = AppState::from_config(config)?;
    let app = router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    info!("Listening on http://{addr}");
    info!("Stream endpoint: http://{addr}/scrape?url=<site>");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
