// Category HTTP Server: Open Graph sitemap stream
//
// Serves `/scrape?url=<site>` and streams the Open Graph metadata of every
// page in the site's sitemap as server-sent events.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use og_sitemap_stream::config::{DeploymentProfile, OgImageWait, ScrapeConfig};
use og_sitemap_stream::utils::constants::{
    DEFAULT_IMAGE_WIDTH, DEFAULT_JPEG_QUALITY, DEFAULT_NAVIGATION_ATTEMPTS,
    DEFAULT_NAVIGATION_RETRY_DELAY_MS, DEFAULT_NAVIGATION_TIMEOUT_SECS,
    DEFAULT_OG_IMAGE_WAIT_SECS, DEFAULT_SITEMAP_TIMEOUT_SECS,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Profile {
    Local,
    Container,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ImageWait {
    BestEffort,
    Required,
}

#[derive(Parser, Debug)]
#[command(name = "og-sitemap-stream")]
#[command(version)]
#[command(about = "Stream Open Graph metadata for every page in a sitemap", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "OG_BIND_ADDR", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Browser argument set: `container` adds flags for small /dev/shm hosts
    #[arg(long, env = "OG_DEPLOYMENT", value_enum, default_value = "local")]
    profile: Profile,

    /// Run the browser with a visible window (debug builds only)
    #[arg(long)]
    headful: bool,

    /// Chrome/Chromium executable; discovered or downloaded when omitted
    #[arg(long, env = "OG_CHROME_PATH")]
    chrome: Option<PathBuf>,

    /// Parent directory for per-crawl browser profiles
    #[arg(long, env = "OG_CHROME_DATA_ROOT")]
    chrome_data_root: Option<PathBuf>,

    /// Let the browser load images (slower; og:image is read from markup)
    #[arg(long)]
    load_images: bool,

    /// Per-attempt navigation timeout in seconds
    #[arg(long, default_value_t = DEFAULT_NAVIGATION_TIMEOUT_SECS)]
    navigation_timeout: u64,

    /// Navigation attempts per URL
    #[arg(long, default_value_t = DEFAULT_NAVIGATION_ATTEMPTS)]
    navigation_attempts: u8,

    /// Delay between navigation attempts in milliseconds
    #[arg(long, default_value_t = DEFAULT_NAVIGATION_RETRY_DELAY_MS)]
    retry_delay_ms: u64,

    /// What to do when a page has no og:image tag
    #[arg(long, value_enum, default_value = "best-effort")]
    og_image_wait: ImageWait,

    /// How long to wait for the og:image tag, in seconds
    #[arg(long, default_value_t = DEFAULT_OG_IMAGE_WAIT_SECS)]
    og_image_wait_secs: u64,

    /// Return image URLs as-is instead of inline JPEG previews
    #[arg(long, env = "OG_NO_INLINE_IMAGES")]
    no_inline_images: bool,

    /// Width of inline previews in pixels
    #[arg(long, default_value_t = DEFAULT_IMAGE_WIDTH)]
    image_width: u32,

    /// JPEG quality of inline previews (1-100)
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY)]
    jpeg_quality: u8,

    /// Sitemap download timeout in seconds
    #[arg(long, default_value_t = DEFAULT_SITEMAP_TIMEOUT_SECS)]
    sitemap_timeout: u64,
}

impl Args {
    fn into_config(self) -> Result<ScrapeConfig> {
        let profile = match self.profile {
            Profile::Local => DeploymentProfile::Local,
            Profile::Container => DeploymentProfile::Container,
        };
        let og_image_wait = match self.og_image_wait {
            ImageWait::BestEffort => OgImageWait::BestEffort,
            ImageWait::Required => OgImageWait::Required,
        };

        ScrapeConfig::builder()
            .bind_addr(self.bind)
            .headless(!self.headful)
            .deployment_profile(profile)
            .browser_executable(self.chrome)
            .chrome_data_root(self.chrome_data_root)
            .block_images(!self.load_images)
            .navigation_timeout_secs(self.navigation_timeout)
            .navigation_attempts(self.navigation_attempts)
            .retry_delay_ms(self.retry_delay_ms)
            .og_image_wait(og_image_wait)
            .og_image_wait_secs(self.og_image_wait_secs)
            .inline_images(!self.no_inline_images)
            .image_width(self.image_width)
            .jpeg_quality(self.jpeg_quality)
            .sitemap_timeout_secs(self.sitemap_timeout)
            .build()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
                .add_directive("chromiumoxide::handler=off".parse()?)
                .add_directive("chromiumoxide::conn=off".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Args::parse().into_config()?;
    og_sitemap_stream::server::serve(&config).await
}
