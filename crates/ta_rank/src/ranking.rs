use std::collections::HashMap;
use tracing::debug;

use crate::normalize::NormalizedTitle;

/// Number of titles each word appears in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    /// Titles are already deduplicated, so each title adds at most one to a word.
    pub fn build(titles: &[NormalizedTitle]) -> Self {
        let mut counts = HashMap::new();
        for title in titles {
            for word in title.words() {
                *counts.entry(word.to_string()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Sum of the frequencies of the title's words.
    pub fn weight(&self, title: &NormalizedTitle) -> u64 {
        title.words().map(|word| self.get(word)).sum()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleScore {
    /// Position of the article in the feed
    pub index: usize,
    pub weight: u64,
}

/// Everything one ranking pass produces.
#[derive(Debug, Clone)]
pub struct Ranking {
    pub frequencies: FrequencyTable,
    /// All titles, heaviest first, feed order among equal weights
    pub scores: Vec<TitleScore>,
    pub selection: Vec<TitleScore>,
}

/// Score every title and select the `top_k` heaviest.
pub fn rank(titles: &[NormalizedTitle], top_k: usize) -> Ranking {
    let frequencies = FrequencyTable::build(titles);
    debug!("{} distinct words across {} titles", frequencies.len(), titles.len());

    let mut scores: Vec<TitleScore> = titles
        .iter()
        .enumerate()
        .map(|(index, title)| TitleScore {
            index,
            weight: frequencies.weight(title),
        })
        .collect();
    // Stable, so ties keep feed order.
    scores.sort_by(|a, b| b.weight.cmp(&a.weight));

    let selection = select_top(&scores, top_k);
    Ranking {
        frequencies,
        scores,
        selection,
    }
}

/// Take the first `k` of `sorted` plus every later score tied with the k-th.
pub fn select_top(sorted: &[TitleScore], k: usize) -> Vec<TitleScore> {
    if k == 0 || sorted.is_empty() {
        return Vec::new();
    }
    if sorted.len() <= k {
        return sorted.to_vec();
    }
    let cutoff = sorted[k - 1].weight;
    let extra = sorted[k..]
        .iter()
        .take_while(|score| score.weight == cutoff)
        .count();
    sorted[..k + extra].to_vec()
}
