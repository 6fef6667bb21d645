use std::collections::BTreeSet;

use crate::stopwords::StopWords;

/// Distinct lowercase words of one title, stop words removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTitle {
    words: BTreeSet<String>,
}

impl NormalizedTitle {
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Only whitespace separates words, so "well-known" and "today," are single words.
pub fn normalize(title: &str, stop_words: &StopWords) -> NormalizedTitle {
    NormalizedTitle {
        words: title
            .to_lowercase()
            .split_whitespace()
            .filter(|word| !stop_words.contains(word))
            .map(str::to_string)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(title: &NormalizedTitle) -> Vec<&str> {
        title.words().collect()
    }

    #[test]
    fn test_lowercase_and_dedup() {
        let title = normalize("News NEWS news Today", &StopWords::empty());
        assert_eq!(words(&title), vec!["news", "today"]);
    }

    #[test]
    fn test_hyphen_and_punctuation_stay_in_word() {
        let title = normalize("A well-known fact, today", &StopWords::empty());
        assert_eq!(words(&title), vec!["a", "fact,", "today", "well-known"]);
        assert!(!title.contains("well"));
        assert!(!title.contains("known"));
    }

    #[test]
    fn test_whitespace_runs() {
        let title = normalize("  Rain\tand \n  Snow  ", &StopWords::empty());
        assert_eq!(words(&title), vec!["and", "rain", "snow"]);
    }

    #[test]
    fn test_capitalized_stop_words_removed() {
        let title = normalize("The Cat And The Hat", &StopWords::default());
        assert_eq!(words(&title), vec!["cat", "hat"]);
    }

    #[test]
    fn test_custom_stop_words() {
        let stop = StopWords::new(["Le", "la"]);
        let title = normalize("La Vie Le Monde the end", &stop);
        assert_eq!(words(&title), vec!["end", "monde", "the", "vie"]);
    }

    #[test]
    fn test_idempotent() {
        let stop = StopWords::default();
        for raw in [
            "Breaking News Today",
            "The State of the Art is the Art",
            "Well-known  facts, and WELL-KNOWN myths",
            "",
            "a an the",
        ] {
            let once = normalize(raw, &stop);
            let joined = once.words().collect::<Vec<_>>().join(" ");
            assert_eq!(normalize(&joined, &stop), once, "title: {:?}", raw);
        }
    }

    #[test]
    fn test_only_stop_words_is_empty() {
        assert!(normalize("The AND a", &StopWords::default()).is_empty());
    }
}
