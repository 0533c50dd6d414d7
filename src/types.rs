use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Default `User-Agent` header sent with every request.
pub const DEFAULT_USER_AGENT: &str = "feedfinder/1.0.0";

/// A discovered syndication endpoint, described by a title and a link.
///
/// Both fields default to the empty string, meaning "absent". A feed with
/// both fields empty is considered empty (see [`crate::is_empty_feed`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    /// Human-readable label (e.g. "golang/go commits")
    pub title: String,
    /// URL of the feed itself, absolute post-normalization
    pub link: String,
}

impl Feed {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// Configuration for outbound HTTP requests made during discovery.
///
/// Passed by reference through the whole call chain and never mutated.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Route requests through this proxy URL, if set
    pub proxy: Option<String>,
    /// Hard deadline per request in milliseconds (default 60000)
    pub timeout_ms: u64,
    /// `User-Agent` header value (default "feedfinder/1.0.0")
    pub user_agent: String,
    /// Additional request headers, merged over the defaults
    pub headers: HashMap<String, String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            proxy: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            headers: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = FetchOptions::default();
        assert_eq!(options.timeout_ms, 60_000);
        assert_eq!(options.user_agent, "feedfinder/1.0.0");
        assert!(options.proxy.is_none());
        assert!(options.headers.is_empty());
    }

    #[test]
    fn test_feed_default_is_empty_strings() {
        let feed = Feed::default();
        assert_eq!(feed.title, "");
        assert_eq!(feed.link, "");
    }
}
