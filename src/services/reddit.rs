//! Reddit matcher: synthesizes `.rss` feed URLs for subreddits, users,
//! comment threads and domain listings from URL path structure alone.

use crate::services::path_segments;
use crate::types::Feed;
use url::Url;

const SUBREDDIT_SORTS: [&str; 4] = ["hot", "new", "top", "rising"];
const USER_SORTS: [&str; 3] = ["new", "hot", "top"];

pub(crate) fn matches(url: &Url) -> bool {
    url.host_str()
        .is_some_and(|host| host.ends_with("reddit.com"))
}

pub(crate) fn feeds(url: &Url) -> Vec<Feed> {
    let segments = path_segments(url);

    let Some(&mode) = segments.first() else {
        return vec![Feed::new("global", "https://www.reddit.com/.rss")];
    };

    let Some(&param) = segments.get(1) else {
        return Vec::new();
    };

    match mode {
        "r" => {
            if segments
                .get(2)
                .is_some_and(|segment| segment.starts_with("comments"))
            {
                // Post/comment-thread feed: the request URL itself plus .rss
                return vec![Feed::new("post", format!("{}.rss", url.as_str()))];
            }
            subreddit_feeds(param)
        }
        "user" => user_feeds(param),
        "domain" => vec![Feed::new(
            format!("/domain/{param}"),
            format!("https://reddit.com/domain/{param}/.rss"),
        )],
        _ => Vec::new(),
    }
}

fn subreddit_feeds(subreddit: &str) -> Vec<Feed> {
    SUBREDDIT_SORTS
        .iter()
        .map(|sort| {
            Feed::new(
                format!("/r/{subreddit} {sort}"),
                format!("https://reddit.com/r/{subreddit}/{sort}/.rss"),
            )
        })
        .collect()
}

fn user_feeds(username: &str) -> Vec<Feed> {
    // (title facet, path component) — "post" is how Reddit labels the
    // submitted listing
    let facets = [("overview", ""), ("post", "submitted/"), ("comments", "comments/")];

    let mut feeds: Vec<Feed> = facets
        .iter()
        .flat_map(|(facet, path)| {
            USER_SORTS.iter().map(move |sort| {
                Feed::new(
                    format!("/u/{username} {facet} {sort}"),
                    format!("https://reddit.com/user/{username}/{path}.rss?sort={sort}"),
                )
            })
        })
        .collect();

    feeds.push(Feed::new(
        format!("/u/{username} awards received (legacy)"),
        format!("https://old.reddit.com/user/{username}/gilded/.rss"),
    ));

    feeds
}
