pub mod document;
pub mod sources;

pub use document::parse_feed;
pub use sources::{create_source, FileFeed, HttpFeed, MemoryFeed};

pub mod prelude {
    pub use super::sources::{create_source, FileFeed, HttpFeed, MemoryFeed};
    pub use ta_core::{Entry, Error, FeedSource, Result};
}
