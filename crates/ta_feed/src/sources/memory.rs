use async_trait::async_trait;
use ta_core::{Entry, FeedSource, Result};

/// Fixed list of entries, handy for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryFeed {
    entries: Vec<Entry>,
}

impl MemoryFeed {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Entries with only titles set, guids numbered from zero.
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = titles
            .into_iter()
            .enumerate()
            .map(|(i, title)| Entry {
                guid: i.to_string(),
                title: title.into(),
                published_at: String::new(),
                created_at: String::new(),
                thumbnail: None,
                image_url: None,
            })
            .collect();
        Self { entries }
    }
}

#[async_trait]
impl FeedSource for MemoryFeed {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch_entries(&self) -> Result<Vec<Entry>> {
        Ok(self.entries.clone())
    }
}
