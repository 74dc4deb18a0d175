//! Optional image post-processing.
//!
//! Turns a page's `og:image` URL into a small inline JPEG. Failures never
//! fail the page: the original URL is kept.

pub mod errors;
pub mod optimizer;
pub mod resize;

use async_trait::async_trait;
use tracing::warn;

pub use errors::ImageError;
pub use optimizer::ImageOptimizer;
pub use resize::resize_to_jpeg;

use crate::page_extractor::PageMetadata;
use crate::utils::is_valid_url;

/// Transform applied to an extracted image URL
#[async_trait]
pub trait ImagePostProcessor: Send + Sync {
    /// Returns the replacement value for the image field
    async fn process(&self, image_url: &str) -> Result<String, ImageError>;
}

/// Run `processor` over `meta.image`, keeping the original URL on failure
///
/// Relative URLs and existing data URIs are left untouched.
pub async fn apply_post_processor(
    processor: &dyn ImagePostProcessor,
    meta: PageMetadata,
) -> PageMetadata {
    let Some(image_url) = meta.image.clone() else {
        return meta;
    };
    if !is_valid_url(&image_url) {
        return meta;
    }

    match processor.process(&image_url).await {
        Ok(replacement) => meta.with_image(replacement),
        Err(e) => {
            warn!("Keeping original image for {}: {e}", meta.url);
            meta
        }
    }
}
