use async_trait::async_trait;
use crate::types::Entry;
use crate::Result;

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Human readable name used in logs
    fn name(&self) -> &str;

    /// Fetch the whole feed and return its entries in feed order
    async fn fetch_entries(&self) -> Result<Vec<Entry>>;
}
