//! Defaults for a run. Running the binary without arguments uses exactly these.

use std::path::PathBuf;
use url::Url;

use crate::{Error, Result};

pub const DEFAULT_FEED_URL: &str =
    "https://api.welcomesoftware.com/v2/feed/49e82ccda46544ff4e48a5fc3f04e343?format=json";

pub const DEFAULT_OUTPUT_PATH: &str = "top_articles.csv";

/// Number of articles selected before ties at the cutoff are added.
pub const DEFAULT_TOP_K: usize = 3;

/// Where the feed document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedLocation {
    Url(Url),
    File(PathBuf),
}

impl FeedLocation {
    pub fn parse_url(url: &str) -> Result<Self> {
        Url::parse(url)
            .map(FeedLocation::Url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))
    }
}
