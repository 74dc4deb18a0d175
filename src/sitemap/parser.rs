//! Sitemap XML parsing
//!
//! Only `<urlset>` documents are understood. A `<sitemapindex>` has no
//! `<url>` children and therefore parses to an empty list.

use quick_xml::de::from_str;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct UrlSet {
    #[serde(rename = "url", default)]
    urls: Vec<UrlEntry>,
}

#[derive(Debug, Deserialize)]
struct UrlEntry {
    #[serde(rename = "loc", default)]
    locs: Vec<String>,
}

/// Parse a sitemap document into page URLs in document order
///
/// Only the first `<loc>` of an entry counts. Entries without one (or with an
/// empty one) are skipped and surrounding whitespace is trimmed.
pub fn parse_sitemap(xml: &str) -> Result<Vec<String>, quick_xml::DeError> {
    let urlset: UrlSet = from_str(xml)?;

    Ok(urlset
        .urls
        .into_iter()
        .filter_map(|entry| entry.locs.into_iter().next())
        .map(|loc| loc.trim().to_string())
        .filter(|loc| !loc.is_empty())
        .collect())
}
