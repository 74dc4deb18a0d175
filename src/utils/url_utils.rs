//! URL helpers for sitemap discovery.

use url::Url;

/// Normalize a site base URL so paths can be appended to it
///
/// Trims surrounding whitespace and any trailing slashes:
/// `"https://example.com/ "` becomes `"https://example.com"`.
#[must_use]
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Join a sitemap path (always starting with `/`) onto a base URL
#[must_use]
pub fn sitemap_url(base_url: &str, path: &str) -> String {
    format!("{}{}", normalize_base_url(base_url), path)
}

/// Check if a URL is valid
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    // Skip data URLs, javascript URLs, and other non-http schemes
    if url.starts_with("data:") || url.starts_with("javascript:") || url.starts_with("mailto:") {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        assert_eq!(normalize_base_url("https://example.com/"), "https://example.com");
        assert_eq!(normalize_base_url("  https://example.com//  "), "https://example.com");
        assert_eq!(normalize_base_url("https://example.com/blog"), "https://example.com/blog");
    }

    #[test]
    fn sitemap_paths_join_without_double_slash() {
        assert_eq!(
            sitemap_url("https://example.com/", "/sitemap-0.xml"),
            "https://example.com/sitemap-0.xml"
        );
    }

    #[test]
    fn only_http_schemes_are_valid() {
        assert!(is_valid_url("https://example.com/a"));
        assert!(is_valid_url("http://localhost:8080"));
        assert!(!is_valid_url("data:image/png;base64,AAAA"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url(""));
    }
}
