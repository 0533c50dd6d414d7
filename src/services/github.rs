//! GitHub matcher: synthesizes feed URLs for repositories, users and the
//! global timeline purely from URL path structure. No network access.

use crate::services::path_segments;
use crate::types::Feed;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

// Repo names: alphanumeric plus hyphen/dot/underscore, must start and end
// alphanumeric, 2-100 chars
static REPO_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]{0,98}[A-Za-z0-9]$").unwrap());

// Usernames: alphanumeric and hyphens, no leading/trailing hyphen, 1-39 chars
static USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]{0,37}[A-Za-z0-9])?$").unwrap());

pub(crate) fn matches(url: &Url) -> bool {
    url.host_str()
        .is_some_and(|host| host.ends_with("github.com"))
}

pub(crate) fn feeds(url: &Url) -> Vec<Feed> {
    let segments = path_segments(url);

    if segments.is_empty() {
        return global_feeds();
    }

    let username = segments[0];

    if let Some(&reponame) = segments.get(1) {
        if REPO_NAME.is_match(reponame) {
            return repo_feeds(username, reponame);
        }
    }

    if segments.len() == 1 && USERNAME.is_match(username) {
        return user_feeds(username);
    }

    Vec::new()
}

fn global_feeds() -> Vec<Feed> {
    vec![
        Feed::new("global public timeline", "https://github.com/timeline"),
        Feed::new(
            "global security advisories",
            "https://github.com/security-advisories.atom",
        ),
    ]
}

fn user_feeds(username: &str) -> Vec<Feed> {
    vec![Feed::new(
        format!("{username} public timeline"),
        format!("https://github.com/{username}.atom"),
    )]
}

fn repo_feeds(username: &str, reponame: &str) -> Vec<Feed> {
    ["commits", "releases", "tags", "wiki"]
        .iter()
        .map(|kind| {
            Feed::new(
                format!("{username}/{reponame} {kind}"),
                format!("https://github.com/{username}/{reponame}/{kind}.atom"),
            )
        })
        .collect()
}
