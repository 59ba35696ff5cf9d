//! Normalized word units produced by the text pipeline.

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech classes understood by the lemmatizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Adjective,
    Verb,
    #[default]
    Noun,
    Adverb,
}

impl PartOfSpeech {
    /// Map a Penn Treebank tag to a lemmatizer class.
    ///
    /// `J*` → adjective, `V*` → verb, `N*` → noun, `R*` → adverb; anything
    /// else falls back to noun.
    pub fn from_treebank(tag: &str) -> Self {
        match tag.chars().next() {
            Some('J') => PartOfSpeech::Adjective,
            Some('V') => PartOfSpeech::Verb,
            Some('R') => PartOfSpeech::Adverb,
            _ => PartOfSpeech::Noun,
        }
    }

    /// Single-letter code (a, v, n, r).
    pub fn code(&self) -> char {
        match self {
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Adverb => 'r',
        }
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartOfSpeech::Adjective => write!(f, "adjective"),
            PartOfSpeech::Verb => write!(f, "verb"),
            PartOfSpeech::Noun => write!(f, "noun"),
            PartOfSpeech::Adverb => write!(f, "adverb"),
        }
    }
}

/// A token after cleaning, stopword removal and lemmatization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Word as it appeared after cleaning
    pub surface_form: String,
    /// Dictionary base form
    pub lemma: String,
    /// Part of speech used to pick the lemma
    pub part_of_speech: PartOfSpeech,
}

impl Token {
    pub fn new(
        surface_form: impl Into<String>,
        lemma: impl Into<String>,
        part_of_speech: PartOfSpeech,
    ) -> Self {
        Self {
            surface_form: surface_form.into(),
            lemma: lemma.into(),
            part_of_speech,
        }
    }
}
