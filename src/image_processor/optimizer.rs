//! HTTP-backed image optimizer producing inline JPEG data URIs

use async_trait::async_trait;
use base64::Engine;
use futures::StreamExt;
use reqwest::Client;
use tracing::debug;

use super::ImagePostProcessor;
use super::errors::ImageError;
use super::resize::resize_to_jpeg;
use crate::config::ImageConfig;
use crate::utils::constants::CHROME_USER_AGENT;

const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Downloads an image, shrinks it to the configured width and inlines it
#[derive(Debug, Clone)]
pub struct ImageOptimizer {
    client: Client,
    config: ImageConfig,
}

impl ImageOptimizer {
    pub fn new(config: ImageConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(CHROME_USER_AGENT)
            .timeout(config.timeout())
            .build()?;
        Ok(Self { client, config })
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "image/avif,image/webp,image/apng,image/*,*/*;q=0.8")
            .send()
            .await
            .map_err(|e| ImageError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ImageError::Fetch(format!(
                "status {} for {url}",
                response.status()
            )));
        }

        let max = self.config.max_bytes();
        let expected = response.content_length().unwrap_or(0);
        if expected > max as u64 {
            return Err(ImageError::Fetch(format!(
                "{expected} bytes exceeds limit of {max} bytes"
            )));
        }

        let mut buffer = Vec::with_capacity(usize::try_from(expected).unwrap_or(0));
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| ImageError::Fetch(e.to_string()))?;
            if buffer.len() + chunk.len() > max {
                return Err(ImageError::Fetch(format!(
                    "body exceeded limit of {max} bytes"
                )));
            }
            buffer.extend_from_slice(&chunk);
        }

        Ok(buffer)
    }
}

#[async_trait]
impl ImagePostProcessor for ImageOptimizer {
    async fn process(&self, image_url: &str) -> Result<String, ImageError> {
        let bytes = self.fetch(image_url).await?;
        debug!("Fetched {} bytes from {image_url}", bytes.len());

        let width = self.config.target_width();
        let quality = self.config.jpeg_quality();
        let jpeg = tokio::task::spawn_blocking(move || resize_to_jpeg(&bytes, width, quality))
            .await
            .map_err(|e| ImageError::Encode(format!("resize task failed: {e}")))??;

        let mut encoded = String::with_capacity(
            JPEG_DATA_URI_PREFIX.len() + base64::encoded_len(jpeg.len(), true).unwrap_or(0),
        );
        encoded.push_str(JPEG_DATA_URI_PREFIX);
        base64::engine::general_purpose::STANDARD.encode_string(&jpeg, &mut encoded);
        Ok(encoded)
    }
}
