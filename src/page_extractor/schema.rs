//! Result types produced for each sitemap entry

use serde::{Deserialize, Serialize};

use crate::utils::constants::META_SENTINEL;

/// Raw tag values as returned by the in-page script
#[derive(Debug, Clone, Deserialize)]
pub struct OgTags {
    #[serde(default = "sentinel")]
    pub title: String,
    #[serde(default = "sentinel")]
    pub description: String,
    #[serde(default = "sentinel")]
    pub image: String,
}

fn sentinel() -> String {
    META_SENTINEL.to_string()
}

impl OgTags {
    /// Package the tags for `url`; an absent image becomes `None`
    #[must_use]
    pub fn into_metadata(self, url: &str) -> PageMetadata {
        let image = if self.image == META_SENTINEL || self.image.trim().is_empty() {
            None
        } else {
            Some(self.image)
        };

        PageMetadata {
            url: url.to_string(),
            title: self.title,
            description: self.description,
            image,
        }
    }
}

/// Open Graph metadata of one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub url: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

impl PageMetadata {
    /// Copy with the image replaced, used after post-processing
    #[must_use]
    pub fn with_image(self, image: String) -> Self {
        Self {
            image: Some(image),
            ..self
        }
    }
}

/// A URL that could not be extracted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeFailure {
    pub url: String,
    pub error: String,
}

/// Terminal outcome for one sitemap entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScrapeResult {
    Success(PageMetadata),
    Failure(ScrapeFailure),
}

impl ScrapeResult {
    #[must_use]
    pub fn failure(url: &str, error: impl ToString) -> Self {
        Self::Failure(ScrapeFailure {
            url: url.to_string(),
            error: error.to_string(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Success(meta) => &meta.url,
            Self::Failure(failure) => &failure.url,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
