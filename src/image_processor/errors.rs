use thiserror::Error;

/// Image post-processing failure; the caller keeps the original URL
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image fetch failed: {0}")]
    Fetch(String),

    #[error("Image decode failed: {0}")]
    Decode(String),

    #[error("Image encode failed: {0}")]
    Encode(String),
}
