mod common;

use og_sitemap_stream::config::ScrapeConfig;
use og_sitemap_stream::sitemap::{SitemapError, SitemapResolver};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn resolver() -> SitemapResolver {
    resolver_with_timeout(5)
}

fn resolver_with_timeout(secs: u64) -> SitemapResolver {
    let config = ScrapeConfig::builder()
        .sitemap_timeout_secs(secs)
        .build()
        .unwrap();
    SitemapResolver::new(config.sitemap()).unwrap()
}

/// HTTP server that never answers `/sitemap-0.xml` and serves `body` elsewhere
async fn stalled_primary_server(body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let body = body.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let n = stream.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).to_string();

                if request.starts_with("GET /sitemap-0.xml") {
                    tokio::time::sleep(Duration::from_secs(30)).await;
                    return;
                }

                let response = format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: application/xml\r\n\
                     content-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn primary_sitemap_is_used_when_available() {
    let mut server = mockito::Server::new_async().await;
    let primary = server
        .mock("GET", "/sitemap-0.xml")
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body(common::sitemap_xml(&["https://a.test/", "https://a.test/about"]))
        .expect(1)
        .create_async()
        .await;
    let fallback = server
        .mock("GET", "/sitemap.xml")
        .expect(0)
        .create_async()
        .await;

    let urls = resolver().resolve(&server.url()).await.unwrap();

    assert_eq!(urls, ["https://a.test/", "https://a.test/about"]);
    primary.assert_async().await;
    fallback.assert_async().await;
}

#[tokio::test]
async fn falls_back_to_sitemap_xml_on_non_success_status() {
    let mut server = mockito::Server::new_async().await;
    let primary = server
        .mock("GET", "/sitemap-0.xml")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;
    let fallback = server
        .mock("GET", "/sitemap.xml")
        .with_status(200)
        .with_body(common::sitemap_xml(&[
            "https://a.test/3",
            "https://a.test/1",
            "https://a.test/2",
        ]))
        .expect(1)
        .create_async()
        .await;

    // Trailing slash on the base URL must not produce `//sitemap.xml`
    let base = format!("{}/", server.url());
    let urls = resolver().resolve(&base).await.unwrap();

    assert_eq!(urls, ["https://a.test/3", "https://a.test/1", "https://a.test/2"]);
    primary.assert_async().await;
    fallback.assert_async().await;
}

#[tokio::test]
async fn both_paths_missing_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    let primary = server
        .mock("GET", "/sitemap-0.xml")
        .with_status(500)
        .expect(1)
        .create_async()
        .await;
    let fallback = server
        .mock("GET", "/sitemap.xml")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;

    let err = resolver().resolve(&server.url()).await.unwrap_err();

    assert!(matches!(err, SitemapError::NotFound));
    assert_eq!(err.to_string(), "Sitemap not found");
    primary.assert_async().await;
    fallback.assert_async().await;
}

#[tokio::test]
async fn empty_urlset_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let _primary = server
        .mock("GET", "/sitemap-0.xml")
        .with_status(200)
        .with_body(common::sitemap_xml(&[]))
        .create_async()
        .await;

    let err = resolver().resolve(&server.url()).await.unwrap_err();
    assert!(matches!(err, SitemapError::Empty));
}

#[tokio::test]
async fn sitemap_index_yields_no_pages() {
    let mut server = mockito::Server::new_async().await;
    let _primary = server
        .mock("GET", "/sitemap-0.xml")
        .with_status(200)
        .with_body(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sitemap><loc>https://a.test/sitemap-1.xml</loc></sitemap>
</sitemapindex>"#,
        )
        .create_async()
        .await;

    let err = resolver().resolve(&server.url()).await.unwrap_err();
    assert!(matches!(err, SitemapError::Empty));
}

#[tokio::test]
async fn malformed_xml_is_a_parse_error() {
    let mut server = mockito::Server::new_async().await;
    let _primary = server
        .mock("GET", "/sitemap-0.xml")
        .with_status(200)
        .with_body("<urlset><url><loc>https://a.test/</url></urlset>")
        .create_async()
        .await;

    let err = resolver().resolve(&server.url()).await.unwrap_err();
    assert!(matches!(err, SitemapError::Parse { .. }), "got {err:?}");
}

#[tokio::test]
async fn unreachable_host_is_not_found() {
    // Bind then drop so the port is known to refuse connections
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = resolver()
        .resolve(&format!("http://{addr}"))
        .await
        .unwrap_err();
    assert!(matches!(err, SitemapError::NotFound), "got {err:?}");
}

#[tokio::test]
async fn stalled_primary_times_out_and_falls_back() {
    let base = stalled_primary_server(common::sitemap_xml(&[
        "https://a.test/x",
        "https://a.test/y",
    ]))
    .await;

    let urls = tokio::time::timeout(
        Duration::from_secs(10),
        resolver_with_timeout(1).resolve(&base),
    )
    .await
    .expect("resolver should give up on the stalled sitemap")
    .unwrap();

    assert_eq!(urls, ["https://a.test/x", "https://a.test/y"]);
}
