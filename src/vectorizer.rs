//! Bag-of-words encoding against a fixed vocabulary.

use std::collections::HashMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::vocab::Vocabulary;

/// A sparse bag-of-words vector: `(id, count)` pairs sorted by ascending ID.
///
/// Counts are always at least 1; an absent ID means a count of zero. The
/// sorted order makes vectors directly comparable and reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentVector(Vec<(usize, usize)>);

impl DocumentVector {
    /// The `(id, count)` pairs in ascending ID order.
    pub fn entries(&self) -> &[(usize, usize)] {
        &self.0
    }

    /// Number of distinct vocabulary tokens present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no token of the record was in the vocabulary.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count for `id`; zero when absent.
    pub fn count(&self, id: usize) -> usize {
        match self.0.binary_search_by_key(&id, |&(i, _)| i) {
            Ok(pos) => self.0[pos].1,
            Err(_) => 0,
        }
    }

    /// Total number of in-vocabulary token occurrences.
    pub fn num_tokens(&self) -> usize {
        self.0.iter().map(|&(_, count)| count).sum()
    }
}

/// Encode a token sequence as a bag of vocabulary ID counts.
///
/// Tokens absent from the vocabulary contribute nothing; they are dropped
/// silently, never an error. The vocabulary is only read, so the same call
/// serves training records and novel query text alike.
pub fn encode(tokens: &[String], vocabulary: &Vocabulary) -> DocumentVector {
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for token in tokens {
        if let Some(id) = vocabulary.id(token) {
            *counts.entry(id).or_insert(0) += 1;
        }
    }

    let mut entries: Vec<(usize, usize)> = counts.into_iter().collect();
    entries.sort_unstable_by_key(|&(id, _)| id);
    DocumentVector(entries)
}

/// Encode every record of a corpus, preserving record order.
pub fn encode_corpus(corpus: &[Vec<String>], vocabulary: &Vocabulary) -> Vec<DocumentVector> {
    corpus
        .iter()
        .map(|tokens| encode(tokens, vocabulary))
        .collect()
}

/// Parallel version of `encode_corpus`; output order matches.
pub fn encode_corpus_parallel(
    corpus: &[Vec<String>],
    vocabulary: &Vocabulary,
) -> Vec<DocumentVector> {
    corpus
        .par_iter()
        .map(|tokens| encode(tokens, vocabulary))
        .collect()
}
