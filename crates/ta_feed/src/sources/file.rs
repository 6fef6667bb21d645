use async_trait::async_trait;
use std::path::PathBuf;
use ta_core::{Entry, FeedSource, Result};
use tracing::info;

use crate::document::parse_feed;

/// Feed document saved on disk, same format as the HTTP feed.
pub struct FileFeed {
    path: PathBuf,
    name: String,
}

impl FileFeed {
    pub fn new(path: PathBuf) -> Self {
        let name = path.display().to_string();
        Self { path, name }
    }
}

#[async_trait]
impl FeedSource for FileFeed {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_entries(&self) -> Result<Vec<Entry>> {
        info!("📂 Reading feed from {}", self.name);
        let body = tokio::fs::read_to_string(&self.path).await?;
        parse_feed(&body)
    }
}
