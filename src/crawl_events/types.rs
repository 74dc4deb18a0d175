//! Frames emitted by a crawl

use serde_json::json;

use crate::page_extractor::ScrapeResult;

/// One unit pushed to the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Terminal outcome of one sitemap entry
    Result(ScrapeResult),
    /// Percentage of entries processed, 0..=100
    Progress(u8),
    /// Crawl-level failure that is not tied to a URL
    Error { error: String, details: String },
    /// Last frame of a stream
    Close,
}

impl Frame {
    /// SSE event name; `None` for plain `message` frames
    #[must_use]
    pub fn event_name(&self) -> Option<&'static str> {
        match self {
            Self::Result(_) | Self::Progress(_) => None,
            Self::Error { .. } => Some("error"),
            Self::Close => Some("close"),
        }
    }

    /// Payload written to the `data:` line
    #[must_use]
    pub fn data(&self) -> String {
        match self {
            Self::Result(result) => serde_json::to_string(result)
                .unwrap_or_else(|e| json!({"url": result.url(), "error": e.to_string()}).to_string()),
            Self::Progress(percent) => json!({ "progress": percent }).to_string(),
            Self::Error { error, details } => {
                json!({ "error": error, "details": details }).to_string()
            }
            Self::Close => "done".to_string(),
        }
    }

    #[must_use]
    pub fn is_close(&self) -> bool {
        matches!(self, Self::Close)
    }
}
