//! Corpus normalization: raw text records to cleaned token sequences.

use std::collections::HashSet;

use rayon::prelude::*;

/// Cleans raw text into lowercase word tokens.
///
/// Punctuation and any character outside `[A-Za-z0-9\s]` become word
/// boundaries, digits are stripped outright (including runs inside mixed
/// tokens like "gpt4"), the remainder is lowercased and split on
/// whitespace, and stopwords are dropped. Configuration is explicit: the
/// stopword set and length floor live on the value, never in ambient state.
#[derive(Debug, Clone)]
pub struct Normalizer {
    stopwords: HashSet<String>,
    min_token_len: usize,
}

impl Normalizer {
    /// Create a normalizer with the given stopword set.
    ///
    /// Stopwords are matched case-insensitively, so the set is lowercased
    /// on the way in.
    pub fn new(stopwords: HashSet<String>) -> Self {
        Self {
            stopwords: stopwords.into_iter().map(|w| w.to_lowercase()).collect(),
            min_token_len: 1,
        }
    }

    /// Drop tokens shorter than `len` characters. Defaults to 1 (off).
    pub fn min_token_len(mut self, len: usize) -> Self {
        self.min_token_len = len;
        self
    }

    /// Union extra stopwords into the configured set.
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Normalize one record into an ordered token sequence.
    ///
    /// Never fails: empty, all-punctuation, or all-numeric input yields an
    /// empty vector. Token order and duplicates are preserved, since
    /// frequency matters downstream.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let trimmed = text.trim_matches(|c| c == '\n' || c == '\r');

        let mut cleaned = String::with_capacity(trimmed.len());
        for c in trimmed.chars() {
            if c.is_ascii_digit() {
                // digits vanish without splitting the surrounding token
                continue;
            }
            if c.is_ascii_alphabetic() || c.is_whitespace() {
                cleaned.push(c.to_ascii_lowercase());
            } else {
                cleaned.push(' ');
            }
        }

        cleaned
            .split_whitespace()
            .filter(|t| t.len() >= self.min_token_len)
            .filter(|t| !self.stopwords.contains(*t))
            .map(str::to_string)
            .collect()
    }

    /// Normalize every record of a corpus, preserving record order.
    pub fn normalize_corpus(&self, records: &[String]) -> Vec<Vec<String>> {
        records.iter().map(|r| self.normalize(r)).collect()
    }

    /// Parallel version of `normalize_corpus`.
    ///
    /// Each record normalizes independently, so the work spreads across all
    /// cores. Output order matches the sequential version.
    pub fn normalize_corpus_parallel(&self, records: &[String]) -> Vec<Vec<String>> {
        records.par_iter().map(|r| self.normalize(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare() -> Normalizer {
        Normalizer::new(HashSet::new())
    }

    #[test]
    fn test_basic_normalize() {
        let tokens = bare().normalize("Hello, World! This is a test.");
        assert_eq!(tokens, vec!["hello", "world", "this", "is", "a", "test"]);
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        let tokens = bare().normalize("hello---world...test!!!end");
        assert_eq!(tokens, vec!["hello", "world", "test", "end"]);
    }

    #[test]
    fn test_digits_stripped_inline() {
        // digit runs inside mixed tokens are removed without splitting
        let tokens = bare().normalize("gpt4 chapter 12 abc123def");
        assert_eq!(tokens, vec!["gpt", "chapter", "abcdef"]);
    }

    #[test]
    fn test_stopwords_case_insensitive() {
        let stop: HashSet<String> = ["the", "A"].iter().map(|s| s.to_string()).collect();
        let tokens = Normalizer::new(stop).normalize("The cat saw a Dog");
        assert_eq!(tokens, vec!["cat", "saw", "dog"]);
    }

    #[test]
    fn test_add_stopwords() {
        let mut normalizer = bare();
        normalizer.add_stopwords(&["Cat"]);
        assert_eq!(normalizer.normalize("cat dog"), vec!["dog"]);
    }

    #[test]
    fn test_empty_and_degenerate_input() {
        assert!(bare().normalize("").is_empty());
        assert!(bare().normalize("!!! ... ???").is_empty());
        assert!(bare().normalize("123 456").is_empty());
        assert!(bare().normalize("\n\n").is_empty());
    }

    #[test]
    fn test_newlines_trimmed() {
        let tokens = bare().normalize("\nhello world\n");
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_non_ascii_becomes_boundary() {
        let tokens = bare().normalize("café naïve");
        assert_eq!(tokens, vec!["caf", "na", "ve"]);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let tokens = bare().normalize("cat cat dog cat");
        assert_eq!(tokens, vec!["cat", "cat", "dog", "cat"]);
    }

    #[test]
    fn test_min_token_len() {
        let tokens = bare().min_token_len(3).normalize("an owl sat on it");
        assert_eq!(tokens, vec!["owl", "sat"]);
    }

    #[test]
    fn test_never_produces_digits_or_punctuation() {
        let tokens = bare().normalize("a1b2!c3 #x_y-z% 9end");
        for token in &tokens {
            assert!(token.chars().all(|c| c.is_ascii_lowercase()), "bad token: {}", token);
        }
    }

    #[test]
    fn test_corpus_order_preserved() {
        let records = vec!["one two".to_string(), "".to_string(), "three".to_string()];
        let corpus = bare().normalize_corpus(&records);
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus[0], vec!["one", "two"]);
        assert!(corpus[1].is_empty());
        assert_eq!(corpus[2], vec!["three"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let records: Vec<String> = (0..64)
            .map(|i| format!("Record {} has; some, PUNCTUATION and {} numbers!", i, i * 7))
            .collect();
        let normalizer = bare();
        assert_eq!(
            normalizer.normalize_corpus(&records),
            normalizer.normalize_corpus_parallel(&records)
        );
    }
}
