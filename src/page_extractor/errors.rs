use thiserror::Error;

/// Per-URL extraction failure
///
/// The `Display` text is what the client sees in the failure frame's
/// `error` field.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Navigation failed after {attempts} attempt(s): {message}")]
    Navigation { attempts: u8, message: String },

    #[error("Timed out after {secs}s waiting for {selector}")]
    MetaTimeout { selector: String, secs: u64 },

    #[error("Metadata evaluation failed: {0}")]
    Evaluation(String),
}
