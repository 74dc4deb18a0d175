//! Open Graph metadata extraction.
//!
//! Navigates a [`PageSession`](crate::browser_session::PageSession) to each
//! URL and reads `og:title`, `og:description` and `og:image` in-page.

pub mod errors;
pub mod extractors;
pub mod js_scripts;
pub mod schema;

pub use errors::ExtractError;
pub use extractors::MetadataExtractor;
pub use schema::{OgTags, PageMetadata, ScrapeFailure, ScrapeResult};
