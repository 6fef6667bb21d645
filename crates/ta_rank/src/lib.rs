//! Title popularity ranking.
//!
//! Titles are reduced to sets of significant words, every word is weighted by
//! the number of titles it appears in, and each title scores the sum of its
//! words' weights. The best scoring titles are selected, keeping every title
//! tied with the last selected one.

pub mod normalize;
pub mod ranking;
pub mod stopwords;

pub use normalize::{normalize, NormalizedTitle};
pub use ranking::{rank, select_top, FrequencyTable, Ranking, TitleScore};
pub use stopwords::StopWords;
