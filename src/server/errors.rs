//! HTTP error responses

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::sitemap::SitemapError;

/// Errors returned before a stream starts
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("URL is required")]
    MissingUrl,

    #[error(transparent)]
    Sitemap(#[from] SitemapError),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingUrl | Self::Sitemap(SitemapError::Empty) => StatusCode::BAD_REQUEST,
            Self::Sitemap(SitemapError::NotFound) => StatusCode::NOT_FOUND,
            Self::Sitemap(SitemapError::Parse { .. }) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {self}");
            json!({ "error": "Internal Server Error", "details": self.to_string() })
        } else {
            json!({ "error": self.to_string() })
        };
        (status, Json(body)).into_response()
    }
}
