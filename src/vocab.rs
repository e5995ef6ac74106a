//! Vocabulary construction: stable token-to-ID assignment over a corpus.

use std::collections::HashMap;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// An immutable mapping from token to integer ID, built once from a
/// training corpus.
///
/// IDs are dense: every ID in `[0, len)` names exactly one token, and no
/// two tokens share an ID. Once built, a vocabulary is never extended or
/// re-ordered; encoding only reads it. The serde derives let callers
/// persist the mapping; this crate itself never does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    token_to_id: HashMap<String, usize>,
    id_to_token: Vec<String>,
}

impl Vocabulary {
    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    /// True when no token survived filtering (or the corpus was empty).
    ///
    /// This is how callers detect an unusable vocabulary; it is a valid
    /// state, not an error.
    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }

    /// ID assigned to `token`, if present.
    pub fn id(&self, token: &str) -> Option<usize> {
        self.token_to_id.get(token).copied()
    }

    /// Token owning `id`, if in range.
    pub fn token(&self, id: usize) -> Option<&str> {
        self.id_to_token.get(id).map(String::as_str)
    }

    /// Whether `token` is in the vocabulary.
    pub fn contains(&self, token: &str) -> bool {
        self.token_to_id.contains_key(token)
    }

    /// Iterate `(token, id)` pairs in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.id_to_token
            .iter()
            .enumerate()
            .map(|(id, token)| (token.as_str(), id))
    }
}

/// Builds a [`Vocabulary`] from normalized token sequences.
#[derive(Debug, Clone)]
pub struct VocabularyBuilder {
    min_frequency: usize,
    max_size: Option<usize>,
}

impl VocabularyBuilder {
    /// Default policy: a token must occur more than once across the corpus.
    pub fn new() -> Self {
        Self {
            min_frequency: 2,
            max_size: None,
        }
    }

    /// Keep only tokens occurring at least `n` times in total.
    ///
    /// Occurrences are summed over the whole corpus, not counted per
    /// record: a token appearing 3 times in one record counts 3.
    pub fn min_frequency(mut self, n: usize) -> Self {
        self.min_frequency = n;
        self
    }

    /// Cap the vocabulary at the `n` most frequent surviving tokens.
    ///
    /// Ties keep the earlier-seen token, and IDs among the kept tokens are
    /// still assigned in first-appearance order.
    pub fn max_size(mut self, n: usize) -> Self {
        self.max_size = Some(n);
        self
    }

    /// Count token occurrences across the corpus, drop tokens below the
    /// frequency threshold, and assign IDs in order of first appearance.
    ///
    /// Deterministic: the same corpus in the same order always yields the
    /// same assignment. An empty corpus, or one where nothing survives the
    /// threshold, yields an empty vocabulary. Fails only on a
    /// `min_frequency` of zero, which is a caller bug.
    pub fn build(&self, corpus: &[Vec<String>]) -> Result<Vocabulary> {
        if self.min_frequency == 0 {
            bail!("min_frequency must be at least 1");
        }

        let mut totals: HashMap<&str, usize> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();
        for record in corpus {
            for token in record {
                let count = totals.entry(token.as_str()).or_insert(0);
                if *count == 0 {
                    first_seen.push(token.as_str());
                }
                *count += 1;
            }
        }

        let mut survivors: Vec<&str> = first_seen
            .into_iter()
            .filter(|t| totals[*t] >= self.min_frequency)
            .collect();

        if let Some(cap) = self.max_size {
            if survivors.len() > cap {
                let mut ranked: Vec<(usize, &str)> = survivors.into_iter().enumerate().collect();
                ranked.sort_by(|a, b| totals[b.1].cmp(&totals[a.1]).then(a.0.cmp(&b.0)));
                ranked.truncate(cap);
                // restore first-appearance order for ID assignment
                ranked.sort_unstable_by_key(|&(seen, _)| seen);
                survivors = ranked.into_iter().map(|(_, t)| t).collect();
            }
        }

        let id_to_token: Vec<String> = survivors.iter().map(|t| t.to_string()).collect();
        let token_to_id = id_to_token
            .iter()
            .enumerate()
            .map(|(id, token)| (token.clone(), id))
            .collect();

        Ok(Vocabulary {
            token_to_id,
            id_to_token,
        })
    }
}

impl Default for VocabularyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
