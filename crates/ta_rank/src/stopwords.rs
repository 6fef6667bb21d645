use std::collections::HashSet;
use std::path::Path;
use ta_core::{Error, Result};

/// Words that carry no meaning for ranking: articles, auxiliaries, joining words.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "have", "has", "be", "and", "for", "with",
    "in", "at",
];

/// Case-insensitive set of ignored words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// One word per line. Blank lines and lines starting with `#` are skipped.
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read stop words from {}: {}", path.display(), e))
        })?;
        Ok(Self::parse(&text))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_WORDS)
    }
}
