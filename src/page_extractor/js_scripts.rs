//! JavaScript evaluation scripts
//!
//! Evaluated in the page after navigation completes.

/// Selector the extractor waits for before reading tags
pub const OG_IMAGE_SELECTOR: &str = r#"meta[property="og:image"]"#;

/// Reads `og:title`, `og:description` and `og:image`
///
/// Each tag is looked up by `property` first, then by `name` (a common
/// authoring mistake), and falls back to `'N/A'` when neither exists.
pub const OG_TAGS_SCRIPT: &str = r#"
    (() => {
        const read = (key) => {
            const tag = document.querySelector(`meta[property="og:${key}"]`)
                || document.querySelector(`meta[name="og:${key}"]`);
            const content = tag ? tag.getAttribute('content') : null;
            return content === null ? 'N/A' : content;
        };

        return {
            title: read('title'),
            description: read('description'),
            image: read('image')
        };
    })()
"#;
