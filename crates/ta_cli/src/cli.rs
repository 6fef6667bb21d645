use std::path::PathBuf;

use clap::Parser;
use ta_core::config::{FeedLocation, DEFAULT_FEED_URL, DEFAULT_OUTPUT_PATH, DEFAULT_TOP_K};
use ta_core::Result;
use ta_rank::StopWords;

/// Rank feed articles by how common the words of their titles are and
/// write the top ones to a CSV report.
#[derive(Parser, Debug)]
#[command(name = "top-articles", author, version, long_about = None)]
pub struct Cli {
    /// Feed endpoint returning the JSON article feed
    #[arg(long, conflicts_with = "feed_file")]
    pub feed_url: Option<String>,
    /// Read the feed document from a local file instead of the network
    #[arg(long)]
    pub feed_file: Option<PathBuf>,
    /// Where to write the report
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
    /// Number of articles to select; ties with the last one are also kept
    #[arg(short = 'k', long = "top", default_value_t = DEFAULT_TOP_K)]
    pub top: usize,
    /// File with one ignored word per line, replacing the built-in list
    #[arg(long)]
    pub stop_words: Option<PathBuf>,
    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub feed: FeedLocation,
    pub output: PathBuf,
    pub top_k: usize,
    pub stop_words: StopWords,
}

impl Cli {
    pub fn into_config(self) -> Result<RunConfig> {
        let feed = match (self.feed_file, self.feed_url) {
            (Some(path), _) => FeedLocation::File(path),
            (None, Some(url)) => FeedLocation::parse_url(&url)?,
            (None, None) => FeedLocation::parse_url(DEFAULT_FEED_URL)?,
        };
        let stop_words = match self.stop_words {
            Some(path) => StopWords::load(&path)?,
            None => StopWords::default(),
        };
        Ok(RunConfig {
            feed,
            output: self.output,
            top_k: self.top,
            stop_words,
        })
    }
}
