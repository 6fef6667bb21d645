use serde::{Deserialize, Serialize};

/// One article from the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub guid: String,
    pub title: String,
    pub published_at: String,
    pub created_at: String,
    pub thumbnail: Option<String>,
    pub image_url: Option<String>,
}

impl Entry {
    /// Thumbnail and full image URL joined by a comma, missing parts left empty.
    pub fn image_links(&self) -> String {
        format!(
            "{},{}",
            self.thumbnail.as_deref().unwrap_or_default(),
            self.image_url.as_deref().unwrap_or_default()
        )
    }
}

/// One row of the top articles report. Field order is column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRecord {
    #[serde(rename = "Guid")]
    pub guid: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Related Image Urls")]
    pub image_links: String,
    #[serde(rename = "Publish Date")]
    pub published_at: String,
    #[serde(rename = "Creation Date")]
    pub created_at: String,
    #[serde(rename = "Recurrence count sum of words in the article title")]
    pub weight: u64,
}

impl ReportRecord {
    pub const HEADERS: [&'static str; 6] = [
        "Guid",
        "Title",
        "Related Image Urls",
        "Publish Date",
        "Creation Date",
        "Recurrence count sum of words in the article title",
    ];

    pub fn from_entry(entry: &Entry, weight: u64) -> Self {
        Self {
            guid: entry.guid.clone(),
            title: entry.title.clone(),
            image_links: entry.image_links(),
            published_at: entry.published_at.clone(),
            created_at: entry.created_at.clone(),
            weight,
        }
    }
}
