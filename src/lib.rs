//! textvec — corpus normalization and bag-of-words vectorization.
//!
//! Data flows one way: raw text records are cleaned into token sequences
//! ([`Normalizer`]), a training corpus assigns each surviving token a
//! stable integer ID ([`VocabularyBuilder`]), and any token sequence can
//! then be encoded as a sparse bag of ID counts against that fixed
//! vocabulary ([`vectorizer::encode`]). [`BowModel`] composes the three
//! steps for the common fit-then-query flow.
//!
//! Where the text comes from and where the vectors go is the caller's
//! business: the crate performs no I/O, owns no CLI, and fits no models.
//! Corpus quality problems degrade gracefully (empty token lists, empty
//! vocabularies, dropped unknown tokens); only caller bugs return errors.

pub mod normalizer;
pub mod pipeline;
pub mod stopwords;
pub mod vectorizer;
pub mod vocab;

pub use normalizer::Normalizer;
pub use pipeline::BowModel;
pub use vectorizer::{encode, encode_corpus, encode_corpus_parallel, DocumentVector};
pub use vocab::{Vocabulary, VocabularyBuilder};
