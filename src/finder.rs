//! Discovery orchestrator: sequences service matchers, page-source
//! parsing and well-known path probing into a single feed search.

use crate::fetch::{FetchError, HttpFetcher};
use crate::parser::{extract_feed_meta, extract_from_html};
use crate::services;
use crate::types::{Feed, FetchOptions};
use crate::util::{dedup_feeds, is_empty_feed};
use crate::well_known;
use thiserror::Error;
use url::Url;

/// Errors surfaced to the caller of [`find`].
///
/// Everything downstream of construction (network failures, bad statuses,
/// parse failures) is recovered internally and reduces to fewer or zero
/// discovered feeds.
#[derive(Debug, Error)]
pub enum FindError {
    /// The target URL could not be parsed
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The HTTP client could not be built (e.g. malformed proxy URL)
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Feed discovery for a single target URL.
pub struct FeedFinder {
    target: Url,
    fetcher: HttpFetcher,
}

impl FeedFinder {
    /// Parses the target URL and builds the HTTP client from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`FindError::InvalidUrl`] for a malformed target and
    /// [`FindError::Client`] if the client configuration is unusable.
    pub fn new(target: &str, options: &FetchOptions) -> Result<Self, FindError> {
        Ok(Self {
            target: Url::parse(target)?,
            fetcher: HttpFetcher::new(options)?,
        })
    }

    /// Finds all available feeds for the target URL.
    ///
    /// Service matchers are consulted first and short-circuit on the
    /// first non-empty result. Otherwise page-source parsing and
    /// well-known path probing run concurrently; both outcomes are
    /// observed regardless of either failing, then merged and
    /// deduplicated by link. The result may legitimately be empty.
    pub async fn find(&self) -> Vec<Feed> {
        let service_feeds = services::try_services(&self.target, &self.fetcher).await;
        if !service_feeds.is_empty() {
            return service_feeds;
        }

        let (page_feeds, probed_feeds) = tokio::join!(
            self.try_page_source(),
            well_known::probe(&self.target, &self.fetcher),
        );

        let mut all_feeds = Vec::new();
        match page_feeds {
            Ok(feeds) => all_feeds.extend(feeds),
            Err(e) => {
                tracing::debug!(url = %self.target, error = %e, "Page source discovery failed");
            }
        }
        all_feeds.extend(probed_feeds);

        dedup_feeds(all_feeds)
    }

    /// Fetches the target page and extracts feed candidates from it:
    /// first as HTML, then, if that yields nothing, by treating the body
    /// itself as a feed document.
    async fn try_page_source(&self) -> Result<Vec<Feed>, FetchError> {
        let response = self.fetcher.fetch(self.target.as_str()).await?;
        if response.status != 200 {
            return Err(FetchError::HttpStatus(response.status));
        }

        let html_feeds = extract_from_html(&response.body, &self.target);
        if !html_feeds.is_empty() {
            return Ok(html_feeds);
        }

        let mut feed = extract_feed_meta(&response.body);
        if is_empty_feed(&feed) {
            return Ok(Vec::new());
        }
        if feed.link.is_empty() {
            feed.link = self.target.to_string();
        }
        Ok(vec![feed])
    }
}

/// Main entry point: finds feeds for a given URL.
///
/// # Errors
///
/// Only [`FindError::InvalidUrl`] (malformed target) and
/// [`FindError::Client`] (unusable HTTP configuration) are surfaced; all
/// per-source failures are logged at debug level and yield fewer feeds.
pub async fn find(target: &str, options: FetchOptions) -> Result<Vec<Feed>, FindError> {
    let finder = FeedFinder::new(target, &options)?;
    Ok(finder.find().await)
}
