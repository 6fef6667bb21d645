use ta_core::config::FeedLocation;
use ta_core::FeedSource;

pub mod file;
pub mod http;
pub mod memory;

pub use file::FileFeed;
pub use http::HttpFeed;
pub use memory::MemoryFeed;

/// Build the feed source for a configured location.
pub fn create_source(location: &FeedLocation) -> Box<dyn FeedSource> {
    match location {
        FeedLocation::Url(url) => Box::new(HttpFeed::new(url.clone())),
        FeedLocation::File(path) => Box::new(FileFeed::new(path.clone())),
    }
}
