//! End-to-end discovery tests against a mock HTTP server.

use feedfinder::{find, FetchOptions, FindError};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SAMPLE_RSS: &str = r#"<?xml version="1.0"?>
<rss version="2.0"><channel>
  <title>Example Blog</title>
  <link>https://example.com/declared-link</link>
</channel></rss>"#;

#[tokio::test]
async fn finds_feeds_declared_in_page_head() {
    let mock_server = MockServer::start().await;
    let html = r#"<html><head>
        <title>Example Blog</title>
        <link rel="alternate" type="application/rss+xml" title="RSS Feed" href="/feed.rss">
        <link rel="alternate" type="application/atom+xml" title="Atom Feed" href="/feed.atom">
    </head><body></body></html>"#;
    Mock::given(method("GET"))
        .and(path("/blog"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&mock_server)
        .await;

    let feeds = find(&format!("{}/blog", mock_server.uri()), FetchOptions::default())
        .await
        .unwrap();

    assert_eq!(feeds.len(), 2);
    assert_eq!(feeds[0].title, "RSS Feed");
    assert_eq!(feeds[0].link, format!("{}/feed.rss", mock_server.uri()));
    assert_eq!(feeds[1].title, "Atom Feed");
    assert_eq!(feeds[1].link, format!("{}/feed.atom", mock_server.uri()));
}

#[tokio::test]
async fn target_may_itself_be_a_feed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_RSS))
        .mount(&mock_server)
        .await;

    let feeds = find(
        &format!("{}/feed.xml", mock_server.uri()),
        FetchOptions::default(),
    )
    .await
    .unwrap();

    // The page-source branch reports the link declared inside the feed;
    // the well-known prober independently hits feed.xml and reports the
    // URL that actually served it. Different links, so both survive dedup.
    assert_eq!(feeds.len(), 2);
    assert_eq!(feeds[0].title, "Example Blog");
    assert_eq!(feeds[0].link, "https://example.com/declared-link");
    assert_eq!(feeds[1].link, format!("{}/feed.xml", mock_server.uri()));
}

#[tokio::test]
async fn feed_without_declared_link_gets_target_url() {
    let bare_rss = r#"<?xml version="1.0"?>
<rss version="2.0"><channel><title>Bare Feed</title></channel></rss>"#;

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(bare_rss))
        .mount(&mock_server)
        .await;

    let url = format!("{}/feed.xml", mock_server.uri());
    let feeds = find(&url, FetchOptions::default()).await.unwrap();

    assert_eq!(feeds.len(), 1);
    assert_eq!(feeds[0].link, url);
}

#[tokio::test]
async fn merges_and_dedups_page_and_well_known_results() {
    // The page head declares /atom.xml, which the well-known prober also
    // finds; the merged result must contain it once, with the head-derived
    // title (first-seen wins)
    let mock_server = MockServer::start().await;
    let html = r#"<html><head>
        <title>Example Blog</title>
        <link rel="alternate" type="application/rss+xml" title="Site Feed" href="/atom.xml">
    </head><body></body></html>"#;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/atom.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_RSS))
        .mount(&mock_server)
        .await;

    let feeds = find(&format!("{}/", mock_server.uri()), FetchOptions::default())
        .await
        .unwrap();

    assert_eq!(feeds.len(), 1);
    assert_eq!(feeds[0].title, "Site Feed");
    assert_eq!(feeds[0].link, format!("{}/atom.xml", mock_server.uri()));
}

#[tokio::test]
async fn unreachable_page_still_probes_well_known_paths() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rss.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_RSS))
        .mount(&mock_server)
        .await;
    // Everything else, including the target page itself, 404s

    let feeds = find(
        &format!("{}/missing", mock_server.uri()),
        FetchOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(feeds.len(), 1);
    assert_eq!(feeds[0].title, "Example Blog");
    assert_eq!(feeds[0].link, format!("{}/rss.xml", mock_server.uri()));
}

#[tokio::test]
async fn speculative_body_anchors_are_returned_unverified() {
    let mock_server = MockServer::start().await;
    let html = r#"<html><head><title>Example Blog</title></head><body>
        <a href="/subscribe">Subscribe via RSS</a>
    </body></html>"#;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&mock_server)
        .await;

    let feeds = find(&format!("{}/", mock_server.uri()), FetchOptions::default())
        .await
        .unwrap();

    // No fetch confirms /subscribe; it is reported as-is with the page title
    assert_eq!(feeds.len(), 1);
    assert_eq!(feeds[0].title, "Example Blog");
    assert_eq!(feeds[0].link, format!("{}/subscribe", mock_server.uri()));
}

#[tokio::test]
async fn everything_failing_yields_empty_not_error() {
    let mock_server = MockServer::start().await;
    // No mounts: every request 404s

    let feeds = find(&format!("{}/", mock_server.uri()), FetchOptions::default())
        .await
        .unwrap();

    assert!(feeds.is_empty());
}

#[tokio::test]
async fn malformed_target_url_is_an_error() {
    let result = find("://no-scheme", FetchOptions::default()).await;
    assert!(matches!(result, Err(FindError::InvalidUrl(_))));
}

#[tokio::test]
async fn service_urls_short_circuit_without_fetching() {
    // GitHub patterns are synthesized purely from the URL; reaching the
    // network is not required (and github.com is not our mock server)
    let feeds = find("https://github.com/rust-lang/rust", FetchOptions::default())
        .await
        .unwrap();

    assert_eq!(feeds.len(), 4);
    assert_eq!(
        feeds[0].link,
        "https://github.com/rust-lang/rust/commits.atom"
    );
}
