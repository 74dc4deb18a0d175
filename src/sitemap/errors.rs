//! Error types for sitemap resolution

/// Failures that end a request before any frame is streamed
#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
    /// Neither the primary nor the fallback sitemap could be fetched
    #[error("Sitemap not found")]
    NotFound,

    /// The sitemap parsed but listed no page URLs
    #[error("No URLs found in the sitemap")]
    Empty,

    /// The sitemap body was not a readable XML document
    #[error("Failed to parse sitemap {url}: {message}")]
    Parse { url: String, message: String },
}
