//! Shared configuration constants for og_sitemap_stream
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Placeholder for a meta tag that is not present on the page
///
/// Distinct from an extraction failure: a page without `og:title` still
/// produces a successful result whose title is this value.
pub const META_SENTINEL: &str = "N/A";

/// Sitemap paths tried in order, relative to the site base URL
///
/// Static site generators that split sitemaps (`next-sitemap`, Astro) write
/// `sitemap-0.xml`; everything else is expected at `sitemap.xml`.
pub const SITEMAP_PATHS: [&str; 2] = ["/sitemap-0.xml", "/sitemap.xml"];

/// Timeout for a single sitemap download
pub const DEFAULT_SITEMAP_TIMEOUT_SECS: u64 = 20;

/// Per-attempt navigation timeout
pub const DEFAULT_NAVIGATION_TIMEOUT_SECS: u64 = 30;

/// Navigation attempts per URL before it becomes a failure result
pub const DEFAULT_NAVIGATION_ATTEMPTS: u8 = 3;

/// Fixed delay between navigation attempts (not exponential)
pub const DEFAULT_NAVIGATION_RETRY_DELAY_MS: u64 = 2_000;

/// How long to wait for `meta[property="og:image"]` after load
pub const DEFAULT_OG_IMAGE_WAIT_SECS: u64 = 5;

/// Target width of inlined preview images, in pixels
pub const DEFAULT_IMAGE_WIDTH: u32 = 300;

/// JPEG quality for inlined preview images
///
/// 80 keeps a 300px preview around 10-25KB, small enough to inline into
/// every result frame.
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

/// Largest image body the post-processor will download (bytes)
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Timeout for a single image download
pub const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 20;

/// Buffered frames between the crawl task and the SSE response
pub const FRAME_CHANNEL_CAPACITY: usize = 64;

/// Chrome user agent string used for both the browser and reqwest
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
///
/// Reference: https://chromiumdash.appspot.com/schedule
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
