//! Timeout utilities for page operations
//!
//! Bounds navigation and other browser round-trips so a hung page fails its
//! URL instead of stalling the whole crawl.

use anyhow::Result;
use std::future::Future;
use std::time::Duration;

/// Wrap an async page operation with an explicit timeout
///
/// # Returns
/// * `Ok(T)` - Operation completed successfully
/// * `Err` - Either the operation failed or the timeout was reached
pub async fn with_page_timeout<F, T>(
    operation: F,
    timeout: Duration,
    operation_name: &str,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, operation).await {
        Ok(result) => result,
        Err(_) => Err(anyhow::anyhow!(
            "{operation_name} timeout after {:.1} seconds",
            timeout.as_secs_f64()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn completes_within_timeout() {
        let value = with_page_timeout(async { Ok(7) }, Duration::from_secs(1), "Op")
            .await
            .unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn reports_operation_name_on_timeout() {
        let err = with_page_timeout(
            async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(())
            },
            Duration::from_millis(20),
            "Page navigation",
        )
        .await
        .unwrap_err();
        assert!(err.to_string().starts_with("Page navigation timeout after"));
    }
}
