//! feedfinder — discovers RSS/Atom/JSON-feed locations for a given URL.
//!
//! Given a target URL, discovery tries, in priority order:
//!
//! 1. **Service matchers** — known URL patterns on GitHub, Reddit and
//!    YouTube, synthesized without fetching (YouTube channel handles need
//!    one page fetch). A non-empty service result is authoritative.
//! 2. **Page-source parsing** — `<link>` feed declarations in the page
//!    head, "rss" anchors in the body, or the page itself being a feed.
//! 3. **Well-known paths** — conventional locations like `atom.xml` and
//!    `feed/`, probed under the target URL and the site root.
//!
//! Steps 2 and 3 run concurrently; their results are merged and
//! deduplicated by link. Every failure past initial URL parsing is
//! non-fatal and only reduces the number of discovered feeds.
//!
//! # Example
//!
//! ```no_run
//! use feedfinder::{find, FetchOptions};
//!
//! # async fn example() -> Result<(), feedfinder::FindError> {
//! let feeds = find("https://github.com/golang/go", FetchOptions::default()).await?;
//! for feed in feeds {
//!     println!("{}: {}", feed.title, feed.link);
//! }
//! # Ok(())
//! # }
//! ```

mod fetch;
mod finder;
mod parser;
mod services;
mod types;
mod util;
mod well_known;

pub use finder::{find, FeedFinder, FindError};
pub use parser::{extract_feed_meta, extract_from_html};
pub use types::{Feed, FetchOptions};
pub use util::{abs_url, dedup_feeds, is_empty_feed};
