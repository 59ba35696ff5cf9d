//! # predtopic-text
//!
//! Deterministic text preprocessing for topic inference: case folding,
//! cleaning, word tokenization, stopword removal and part-of-speech guided
//! lemmatization.

mod lexicon;

pub mod lemmatizer;
pub mod normalizer;
pub mod stopwords;
pub mod tagger;

pub use lemmatizer::Lemmatizer;
pub use normalizer::{
    case_fold, clean, lemmatize, remove_stopwords, surface_tokens, tokenize, NormalizerConfig,
    TextNormalizer,
};
pub use stopwords::{english_stopwords, is_stopword, StopwordFilter};
pub use tagger::PosTagger;
