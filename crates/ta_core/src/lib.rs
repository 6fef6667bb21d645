pub mod config;
pub mod error;
pub mod report;
pub mod source;
pub mod types;

pub use error::Error;
pub use report::ReportSink;
pub use source::FeedSource;
pub use types::{Entry, ReportRecord};

pub type Result<T> = std::result::Result<T, Error>;
