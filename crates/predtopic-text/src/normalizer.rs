//! Text normalization pipeline.
//!
//! Steps run in a fixed order:
//! 1. Case folding
//! 2. Cleaning (URLs, punctuation, digits, whitespace)
//! 3. Word tokenization (UAX #29 word boundaries)
//! 4. Stopword removal
//! 5. Part-of-speech guided lemmatization
//!
//! The same pipeline featurized the training corpus, so its output can be fed
//! straight into a dictionary lookup.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use predtopic_types::{PartOfSpeech, Token};

use crate::lemmatizer::Lemmatizer;
use crate::stopwords::StopwordFilter;
use crate::tagger::PosTagger;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+|https\S+").expect("valid url regex"));
static PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid punctuation regex"));
static DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid digit regex"));
static SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Unicode lowercase.
pub fn case_fold(text: &str) -> String {
    text.to_lowercase()
}

/// Strip URLs, punctuation and digit runs, then collapse whitespace.
pub fn clean(text: &str) -> String {
    let text = URL_RE.replace_all(text, "");
    let text = PUNCT_RE.replace_all(&text, "");
    let text = DIGIT_RE.replace_all(&text, "");
    SPACE_RE.replace_all(&text, " ").trim().to_string()
}

/// Split cleaned text into words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words().map(str::to_string).collect()
}

/// Drop tokens found in the English stopword list.
pub fn remove_stopwords(tokens: Vec<String>) -> Vec<String> {
    StopwordFilter::new().retain(tokens)
}

/// Tag and lemmatize tokens. Tags outside J/V/N/R are lemmatized as nouns.
pub fn lemmatize(tokens: &[String]) -> Vec<Token> {
    let tags = PosTagger::new().tag(tokens);
    let lemmatizer = Lemmatizer::new();
    tokens
        .iter()
        .zip(tags)
        .map(|(word, tag)| {
            let pos = PartOfSpeech::from_treebank(tag);
            Token::new(word.as_str(), lemmatizer.lemmatize(word, pos), pos)
        })
        .collect()
}

/// Display tokens for the colored-text renderer: words and punctuation in
/// their original case, whitespace dropped.
pub fn surface_tokens(raw: &str) -> Vec<String> {
    raw.split_word_bounds()
        .filter(|t| !t.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalizer options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Additional stop words on top of the English list
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
    /// Tokens shorter than this (in chars) are dropped after cleaning
    #[serde(default = "default_min_token_length")]
    pub min_token_length: usize,
}

fn default_min_token_length() -> usize {
    1
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            extra_stopwords: Vec::new(),
            min_token_length: default_min_token_length(),
        }
    }
}

/// Deterministic text normalizer. Pure; holds no mutable state.
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    stopwords: StopwordFilter,
    min_token_length: usize,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self::with_config(NormalizerConfig::default())
    }

    pub fn with_config(config: NormalizerConfig) -> Self {
        Self {
            stopwords: StopwordFilter::new().with_extra(config.extra_stopwords),
            min_token_length: config.min_token_length,
        }
    }

    /// Run the full pipeline. Output preserves input order, duplicates kept.
    pub fn normalize(&self, raw: &str) -> Vec<Token> {
        let cleaned = clean(&case_fold(raw));
        if cleaned.is_empty() {
            return Vec::new();
        }

        let words: Vec<String> = tokenize(&cleaned)
            .into_iter()
            .filter(|w| w.chars().count() >= self.min_token_length)
            .collect();
        let words = self.stopwords.retain(words);
        let tokens = lemmatize(&words);

        debug!(
            input_chars = raw.chars().count(),
            tokens = tokens.len(),
            "Normalized text"
        );
        tokens
    }

    /// Lemmas only, for bag-of-words featurization.
    pub fn lemmas(&self, raw: &str) -> Vec<String> {
        self.normalize(raw).into_iter().map(|t| t.lemma).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean() {
        assert_eq!(clean(&case_fold("Visit https://x.com NOW 123!")), "visit now");
        assert_eq!(clean("www.example.org rocks"), "rocks");
        assert_eq!(clean("don't  stop\n\tme"), "dont stop me");
        assert_eq!(clean("under_score"), "under_score");
        assert_eq!(clean("   "), "");
    }

    #[test]
    fn test_normalize_example_sentence() {
        let normalizer = TextNormalizer::new();
        let lemmas = normalizer.lemmas("The cats are running quickly");
        assert_eq!(lemmas, vec!["cat", "run", "quickly"]);

        let tokens = normalizer.normalize("The cats are running quickly");
        assert_eq!(tokens[0].surface_form, "cats");
        assert_eq!(tokens[0].part_of_speech, PartOfSpeech::Noun);
        assert_eq!(tokens[1].part_of_speech, PartOfSpeech::Verb);
        assert_eq!(tokens[2].part_of_speech, PartOfSpeech::Adverb);
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let normalizer = TextNormalizer::new();
        let text = "Deep learning models improved the prediction of stock prices in 2021.";
        assert_eq!(normalizer.normalize(text), normalizer.normalize(text));
    }

    #[test]
    fn test_empty_input() {
        let normalizer = TextNormalizer::new();
        assert!(normalizer.normalize("").is_empty());
        assert!(normalizer.normalize("   \n\t").is_empty());
        assert!(normalizer.normalize("12345 !!! https://a.b").is_empty());
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        let lemmas = TextNormalizer::new().lemmas("data data science data");
        assert_eq!(lemmas, vec!["data", "data", "science", "data"]);
    }

    #[test]
    fn test_non_ascii_input() {
        let normalizer = TextNormalizer::new();
        let lemmas = normalizer.lemmas("Über naïve Lösungen für データ");
        assert!(lemmas.contains(&"über".to_string()));
        assert!(lemmas.contains(&"データ".to_string()));
    }

    #[test]
    fn test_config_extra_stopwords_and_min_length() {
        let normalizer = TextNormalizer::with_config(NormalizerConfig {
            extra_stopwords: vec!["paper".to_string()],
            min_token_length: 3,
        });
        let lemmas = normalizer.lemmas("This paper proposes an ai framework");
        assert_eq!(lemmas, vec!["propose", "framework"]);
    }

    #[test]
    fn test_config_defaults_from_json() {
        let config: NormalizerConfig =
            serde_json::from_str(r#"{"extra_stopwords": ["paper"]}"#).unwrap();
        assert_eq!(config.extra_stopwords, vec!["paper"]);
        assert_eq!(config.min_token_length, 1);

        let empty: NormalizerConfig = serde_json::from_str("{}").unwrap();
        assert!(empty.extra_stopwords.is_empty());
        assert_eq!(empty.min_token_length, 1);
    }

    #[test]
    fn test_surface_tokens() {
        assert_eq!(
            surface_tokens("Data science, unknownword!"),
            vec!["Data", "science", ",", "unknownword", "!"]
        );
        assert!(surface_tokens("").is_empty());
    }
}
