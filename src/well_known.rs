//! Well-known path prober: attempts a fixed list of conventional feed
//! paths under the target URL, falling back to the site root.

use crate::fetch::HttpFetcher;
use crate::parser::extract_feed_meta;
use crate::types::Feed;
use crate::util::is_empty_feed;
use futures::stream::{self, StreamExt};
use url::Url;

const WELL_KNOWN_PATHS: [&str; 10] = [
    "atom.xml",
    "feed.xml",
    "rss.xml",
    "index.xml",
    "atom.json",
    "feed.json",
    "rss.json",
    "index.json",
    "feed/",
    "rss/",
];

/// Paths within a round have no ordering dependency, so they are fetched
/// with bounded concurrency; result order still follows the path list.
const PROBE_CONCURRENCY: usize = 4;

/// Probes the well-known paths against `base`; if that round comes up
/// completely empty and the site root differs from `base`, probes the
/// same paths against the root.
pub(crate) async fn probe(base: &Url, fetcher: &HttpFetcher) -> Vec<Feed> {
    let feeds = probe_round(base, fetcher).await;
    if !feeds.is_empty() {
        return feeds;
    }

    match base.join("/") {
        Ok(root) if root != *base => probe_round(&root, fetcher).await,
        _ => feeds,
    }
}

async fn probe_round(base: &Url, fetcher: &HttpFetcher) -> Vec<Feed> {
    stream::iter(WELL_KNOWN_PATHS)
        .map(|path| probe_path(base, path, fetcher))
        .buffered(PROBE_CONCURRENCY)
        .filter_map(|found| async move { found })
        .collect()
        .await
}

/// Fetches one candidate path and parses the body as a feed. Any failure
/// (resolution, network, non-200, parse) skips the path.
async fn probe_path(base: &Url, path: &str, fetcher: &HttpFetcher) -> Option<Feed> {
    let target = match base.join(path) {
        Ok(target) => target,
        Err(e) => {
            tracing::debug!(path = %path, error = %e, "Failed to resolve well-known path");
            return None;
        }
    };

    let response = match fetcher.fetch(target.as_str()).await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(url = %target, error = %e, "Well-known path fetch failed");
            return None;
        }
    };

    if response.status != 200 {
        tracing::debug!(url = %target, status = response.status, "Well-known path not usable");
        return None;
    }

    let mut feed = extract_feed_meta(&response.body);
    if is_empty_feed(&feed) {
        return None;
    }

    // Trust the URL that actually worked over any embedded self-link
    feed.link = target.to_string();
    Some(feed)
}
