//! The JSON shape of the article feed.
//!
//! Only the fields the report needs are read; everything else in the
//! document is ignored.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use ta_core::{Entry, Error, Result};

#[derive(Debug, Deserialize)]
struct FeedDocument {
    entries: Vec<FeedEntry>,
}

#[derive(Debug, Deserialize)]
struct FeedEntry {
    content: FeedContent,
}

#[derive(Debug, Deserialize)]
struct FeedContent {
    guid: String,
    title: String,
    #[serde(default)]
    images: Option<FeedImages>,
    #[serde(default, deserialize_with = "verbatim")]
    published_at: String,
    #[serde(default, deserialize_with = "verbatim")]
    created_at: String,
}

#[derive(Debug, Default, Deserialize)]
struct FeedImages {
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// Keep a scalar field as text: strings as-is, other values in their JSON form, null as empty.
fn verbatim<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl From<FeedEntry> for Entry {
    fn from(entry: FeedEntry) -> Self {
        let content = entry.content;
        let images = content.images.unwrap_or_default();
        Entry {
            guid: content.guid,
            title: content.title,
            published_at: content.published_at,
            created_at: content.created_at,
            thumbnail: non_empty(images.thumbnail),
            image_url: non_empty(images.url),
        }
    }
}

/// Parse a feed body into its entries, in feed order.
pub fn parse_feed(body: &str) -> Result<Vec<Entry>> {
    let document: FeedDocument =
        serde_json::from_str(body).map_err(|e| Error::Feed(e.to_string()))?;
    Ok(document.entries.into_iter().map(Entry::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_entry() {
        let body = r#"{
            "entries": [{
                "content": {
                    "guid": "g-1",
                    "title": "Breaking News Today",
                    "images": {"thumbnail": "http://t/1.jpg", "url": "http://i/1.jpg"},
                    "published_at": "2021-03-01T10:00:00+00:00",
                    "created_at": "2021-02-28T09:00:00+00:00",
                    "body": "ignored"
                },
                "id": 42
            }],
            "next": null
        }"#;
        let entries = parse_feed(body).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.guid, "g-1");
        assert_eq!(entry.title, "Breaking News Today");
        assert_eq!(entry.thumbnail.as_deref(), Some("http://t/1.jpg"));
        assert_eq!(entry.image_url.as_deref(), Some("http://i/1.jpg"));
        assert_eq!(entry.published_at, "2021-03-01T10:00:00+00:00");
        assert_eq!(entry.created_at, "2021-02-28T09:00:00+00:00");
    }

    #[test]
    fn test_parse_missing_images_and_odd_timestamps() {
        let body = r#"{"entries": [
            {"content": {"guid": "a", "title": "One", "published_at": 1614592800}},
            {"content": {"guid": "b", "title": "Two", "images": null, "created_at": null}},
            {"content": {"guid": "c", "title": "Three", "images": {"thumbnail": "", "url": null}}}
        ]}"#;
        let entries = parse_feed(body).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].published_at, "1614592800");
        assert_eq!(entries[0].created_at, "");
        assert_eq!(entries[1].created_at, "");
        for entry in &entries {
            assert!(entry.thumbnail.is_none());
            assert!(entry.image_url.is_none());
            assert_eq!(entry.image_links(), ",");
        }
    }

    #[test]
    fn test_parse_empty_entries() {
        assert!(parse_feed(r#"{"entries": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(parse_feed("<html>"), Err(Error::Feed(_))));
        assert!(matches!(parse_feed(r#"{"items": []}"#), Err(Error::Feed(_))));
        assert!(matches!(
            parse_feed(r#"{"entries": [{"content": {"guid": "a"}}]}"#),
            Err(Error::Feed(_))
        ));
        assert!(matches!(
            parse_feed(r#"{"entries": [{"title": "no content"}]}"#),
            Err(Error::Feed(_))
        ));
    }
}
