//! Content parsing: feed-link extraction from HTML pages and metadata
//! extraction from raw RSS/Atom documents.
//!
//! Both entry points are total functions over arbitrary input — malformed
//! content yields an empty result, never an error. Failures are visible
//! only at debug log level.

use crate::types::Feed;
use crate::util::abs_url;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// `<link type="...">` values recognized as feed declarations, scanned in
/// this order (rss, atom, json, feed+json); document order within a group.
const FEED_LINK_TYPES: [&str; 4] = [
    "application/rss+xml",
    "application/atom+xml",
    "application/json",
    "application/feed+json",
];

/// Extracts feed candidates from an HTML document.
///
/// Scans `<link>` elements in the head for known feed MIME types, then
/// scans body anchors whose text mentions "rss". Body-derived candidates
/// are speculative: no confirming fetch is made, so they may not serve
/// feed content at all.
pub fn extract_from_html(document: &str, base: &Url) -> Vec<Feed> {
    let html = Html::parse_document(document);
    let mut feeds = Vec::new();

    let page_title = first_title_text(&html);

    // Head <link> tags with feed types
    for feed_type in FEED_LINK_TYPES {
        let selector = Selector::parse(&format!("head link[type='{feed_type}']")).unwrap();
        for element in html.select(&selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            let title = element
                .value()
                .attr("title")
                .map(str::to_owned)
                .unwrap_or_else(|| page_title.clone());
            feeds.push(Feed {
                title,
                link: abs_url(base.as_str(), href),
            });
        }
    }

    // Body anchors mentioning "rss" — distinct hrefs in document order
    let anchor_selector = Selector::parse("body a").unwrap();
    let mut suspected: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for element in html.select(&anchor_selector) {
        let text: String = element.text().collect();
        if !text.to_lowercase().contains("rss") {
            continue;
        }
        if let Some(href) = element.value().attr("href") {
            if seen.insert(href) {
                suspected.push(href);
            }
        }
    }

    for href in suspected {
        feeds.push(Feed {
            title: page_title.clone(),
            link: abs_url(base.as_str(), href),
        });
    }

    feeds
}

fn first_title_text(html: &Html) -> String {
    let selector = Selector::parse("title").unwrap();
    html.select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_owned())
        .unwrap_or_default()
}

/// Extracts title and link metadata from a raw RSS or Atom document.
///
/// Malformed or non-feed content yields an empty [`Feed`]. For Atom, the
/// `rel="self"` link is preferred over any other link entries.
pub fn extract_feed_meta(content: &str) -> Feed {
    let trimmed = content.trim();
    if !looks_like_feed(trimmed) {
        return Feed::default();
    }

    let parsed = match feed_rs::parser::parse(trimmed.as_bytes()) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!(error = %e, "Failed to parse feed content");
            return Feed::default();
        }
    };

    let title = parsed.title.map(|t| t.content).unwrap_or_default();
    let link = parsed
        .links
        .iter()
        .find(|link| link.rel.as_deref() == Some("self"))
        .or_else(|| parsed.links.first())
        .map(|link| link.href.clone())
        .unwrap_or_default();

    Feed { title, link }
}

/// Cheap structural gate before full XML parsing: the document must start
/// with an XML declaration or an `<rss`/`<feed` root, and contain one of
/// those roots somewhere.
fn looks_like_feed(trimmed: &str) -> bool {
    if !trimmed.starts_with("<?xml")
        && !trimmed.starts_with("<rss")
        && !trimmed.starts_with("<feed")
    {
        return false;
    }

    trimmed.contains("<rss") || trimmed.contains("<feed")
}
