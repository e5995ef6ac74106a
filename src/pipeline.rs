//! End-to-end corpus fitting and query encoding.

use anyhow::Result;
use tracing::debug;

use crate::normalizer::Normalizer;
use crate::vectorizer::{self, DocumentVector};
use crate::vocab::{Vocabulary, VocabularyBuilder};

/// A trained bag-of-words model: a normalizer plus the vocabulary it
/// produced over a training corpus.
///
/// The vocabulary is fixed at fit time. Encoding novel text afterwards
/// never extends or re-orders it.
#[derive(Debug, Clone)]
pub struct BowModel {
    normalizer: Normalizer,
    vocabulary: Vocabulary,
}

impl BowModel {
    /// Fit a model over raw training records.
    ///
    /// Pipeline: normalize records, build the vocabulary, encode the
    /// training set. Returns the trained model together with one document
    /// vector per input record, in input order.
    pub fn fit(
        records: &[String],
        normalizer: Normalizer,
        builder: &VocabularyBuilder,
    ) -> Result<(Self, Vec<DocumentVector>)> {
        let corpus = normalizer.normalize_corpus(records);
        debug!(records = records.len(), "normalized training corpus");

        let vocabulary = builder.build(&corpus)?;
        debug!(vocab_size = vocabulary.len(), "built vocabulary");

        let vectors = vectorizer::encode_corpus(&corpus, &vocabulary);
        debug!(vectors = vectors.len(), "encoded training corpus");

        Ok((
            Self {
                normalizer,
                vocabulary,
            },
            vectors,
        ))
    }

    /// Parallel version of `fit`.
    ///
    /// Normalization and encoding fan out per record; frequency counting
    /// and ID assignment stay a single sequential pass, so the resulting
    /// vocabulary is identical to the sequential fit.
    pub fn fit_parallel(
        records: &[String],
        normalizer: Normalizer,
        builder: &VocabularyBuilder,
    ) -> Result<(Self, Vec<DocumentVector>)> {
        let corpus = normalizer.normalize_corpus_parallel(records);
        debug!(records = records.len(), "normalized training corpus");

        let vocabulary = builder.build(&corpus)?;
        debug!(vocab_size = vocabulary.len(), "built vocabulary");

        let vectors = vectorizer::encode_corpus_parallel(&corpus, &vocabulary);
        debug!(vectors = vectors.len(), "encoded training corpus");

        Ok((
            Self {
                normalizer,
                vocabulary,
            },
            vectors,
        ))
    }

    /// Encode novel query text against the trained vocabulary.
    ///
    /// Unseen tokens are dropped silently. With an empty vocabulary every
    /// query encodes to an empty vector; callers check
    /// `vocabulary().is_empty()` to tell the two states apart.
    pub fn encode(&self, text: &str) -> DocumentVector {
        let tokens = self.normalizer.normalize(text);
        vectorizer::encode(&tokens, &self.vocabulary)
    }

    /// The trained vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Consume the model, handing the vocabulary to an external consumer.
    pub fn into_vocabulary(self) -> Vocabulary {
        self.vocabulary
    }
}
