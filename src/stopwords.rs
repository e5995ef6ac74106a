//! Built-in stopword lists.

use std::collections::HashSet;

/// Default English stopword set.
///
/// A starting point for normalization; callers union in domain-specific
/// words via `Normalizer::add_stopwords` or pass their own set entirely.
/// Nothing in this crate consults a global list.
pub fn english() -> HashSet<String> {
    let words = [
        // Articles and determiners
        "a", "an", "the", "this", "that", "these", "those", "each", "every",
        "some", "any", "no", "all", "both", "few", "more", "most", "other",
        "such", "own", "same",
        // Pronouns
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
        "your", "yours", "yourself", "he", "him", "his", "himself", "she",
        "her", "hers", "herself", "it", "its", "itself", "they", "them",
        "their", "theirs", "themselves", "what", "which", "who", "whom",
        // Auxiliary and modal verbs
        "am", "is", "are", "was", "were", "be", "been", "being", "have",
        "has", "had", "having", "do", "does", "did", "doing", "will",
        "would", "shall", "should", "can", "could", "may", "might", "must",
        "ought",
        // Prepositions
        "at", "by", "for", "from", "in", "into", "of", "on", "to", "with",
        "about", "against", "between", "through", "during", "before",
        "after", "above", "below", "up", "down", "out", "off", "over",
        "under", "again", "further",
        // Conjunctions and particles
        "and", "but", "or", "nor", "so", "yet", "not", "only", "than",
        "then", "once", "if", "because", "as", "until", "while", "when",
        "where", "why", "how",
        // Common fillers
        "here", "there", "too", "very", "just", "also", "now", "well",
    ];

    words.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_common_words() {
        let stop = english();
        for word in ["the", "a", "of", "and", "to", "in", "was", "it"] {
            assert!(stop.contains(word), "missing stopword: {}", word);
        }
    }

    #[test]
    fn test_content_words_absent() {
        let stop = english();
        for word in ["cat", "market", "computer", "interaction"] {
            assert!(!stop.contains(word), "unexpected stopword: {}", word);
        }
    }

    #[test]
    fn test_all_lowercase() {
        assert!(english().iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }
}
