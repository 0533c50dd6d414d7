//! Service matchers: recognizers for third-party platforms whose feed
//! URLs can be synthesized from URL structure alone (plus one page fetch
//! for YouTube channel handles).
//!
//! The matcher set is closed and consulted in a fixed order; the first
//! matcher that recognizes a URL and yields feeds is authoritative and
//! short-circuits the rest of discovery.

mod github;
mod reddit;
mod youtube;

use crate::fetch::{FetchError, HttpFetcher};
use crate::types::Feed;
use url::Url;

/// Known third-party platforms with predictable feed locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Service {
    GitHub,
    Reddit,
    YouTube,
}

/// Registration order is a correctness invariant: the first match governs.
pub(crate) const SERVICES: [Service; 3] = [Service::GitHub, Service::Reddit, Service::YouTube];

impl Service {
    pub(crate) fn matches(self, url: &Url) -> bool {
        match self {
            Service::GitHub => github::matches(url),
            Service::Reddit => reddit::matches(url),
            Service::YouTube => youtube::matches(url),
        }
    }

    pub(crate) async fn feeds(
        self,
        url: &Url,
        fetcher: &HttpFetcher,
    ) -> Result<Vec<Feed>, FetchError> {
        match self {
            Service::GitHub => Ok(github::feeds(url)),
            Service::Reddit => Ok(reddit::feeds(url)),
            Service::YouTube => youtube::feeds(url, fetcher).await,
        }
    }
}

/// Tries each registered service against the URL. A matcher error is
/// logged and skipped; it never aborts discovery.
pub(crate) async fn try_services(url: &Url, fetcher: &HttpFetcher) -> Vec<Feed> {
    for service in SERVICES {
        if !service.matches(url) {
            continue;
        }

        match service.feeds(url, fetcher).await {
            Ok(feeds) if !feeds.is_empty() => return feeds,
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(service = ?service, url = %url, error = %e, "Service matcher failed");
            }
        }
    }

    Vec::new()
}

/// Splits a URL path into its non-empty segments.
pub(crate) fn path_segments(url: &Url) -> Vec<&str> {
    url.path().split('/').filter(|s| !s.is_empty()).collect()
}
