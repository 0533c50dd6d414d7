//! YouTube matcher: playlist feeds come straight from the `list` query
//! parameter; channel handles require fetching the page to extract the
//! browse id embedded in its markup.

use crate::fetch::{FetchError, HttpFetcher};
use crate::types::Feed;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

// The browse id is embedded in the channel page as an initial-data
// key/value pair. Best-effort heuristic: upstream markup changes can
// legitimately make this return nothing.
static BROWSE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\{"key":"browse_id","value":"(.+?)"\}"#).unwrap());

pub(crate) fn matches(url: &Url) -> bool {
    url.host_str()
        .is_some_and(|host| host.ends_with("youtube.com") || host.ends_with("youtu.be"))
}

pub(crate) async fn feeds(url: &Url, fetcher: &HttpFetcher) -> Result<Vec<Feed>, FetchError> {
    if url.path().starts_with("/@") {
        return channel_feeds(url, fetcher).await;
    }

    if url.path().starts_with("/playlist") {
        return Ok(playlist_feeds(url));
    }

    Ok(Vec::new())
}

async fn channel_feeds(url: &Url, fetcher: &HttpFetcher) -> Result<Vec<Feed>, FetchError> {
    let response = fetcher.fetch(url.as_str()).await?;

    let Some(captures) = BROWSE_ID.captures(&response.body) else {
        tracing::debug!(url = %url, "No browse id found in channel page");
        return Ok(Vec::new());
    };

    let channel_id = &captures[1];
    Ok(vec![Feed::new(
        "Channel",
        format!("https://www.youtube.com/feeds/videos.xml?channel_id={channel_id}"),
    )])
}

fn playlist_feeds(url: &Url) -> Vec<Feed> {
    let Some(playlist_id) = url
        .query_pairs()
        .find(|(key, _)| key == "list")
        .map(|(_, value)| value.into_owned())
    else {
        return Vec::new();
    };

    vec![Feed::new(
        "Playlist",
        format!("https://www.youtube.com/feeds/videos.xml?playlist_id={playlist_id}"),
    )]
}
