//! URL normalization and feed-set utilities shared across discovery strategies.

use crate::types::Feed;
use std::collections::HashSet;
use url::Url;

/// Resolves a possibly-relative link against a base URL.
///
/// Returns `link` unchanged if it already parses as an absolute URL,
/// `base` when `link` is empty, and `link` as-is when neither it nor
/// `base` can be parsed.
pub fn abs_url(base: &str, link: &str) -> String {
    if link.is_empty() {
        return base.to_owned();
    }

    if let Ok(absolute) = Url::parse(link) {
        return absolute.to_string();
    }

    // Relative reference: resolve against base
    if let Ok(base_url) = Url::parse(base) {
        if let Ok(resolved) = base_url.join(link) {
            return resolved.to_string();
        }
    }

    link.to_owned()
}

/// Returns true iff both the title and the link are empty.
pub fn is_empty_feed(feed: &Feed) -> bool {
    feed.title.is_empty() && feed.link.is_empty()
}

/// Deduplicates feeds by link, preserving first-seen order.
pub fn dedup_feeds(feeds: Vec<Feed>) -> Vec<Feed> {
    let mut seen = HashSet::new();
    feeds
        .into_iter()
        .filter(|feed| seen.insert(feed.link.clone()))
        .collect()
}
