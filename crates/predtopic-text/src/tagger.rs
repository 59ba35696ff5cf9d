//! Deterministic Penn Treebank tagger.
//!
//! Tags lowercase tokens in three passes: closed-class lexicon lookup, suffix
//! rules for open-class words, then a left-context pass that re-reads `-ing`
//! forms as nouns inside noun phrases.

use tracing::trace;

use crate::lemmatizer::comparative_base;
use crate::lexicon::{
    ADJECTIVES, ADVERBS, CLOSED_CLASS, EED_BASES, ING_COMPOUND_HEADS, ING_NOUNS, LY_NOUNS,
    LY_VERBS, NOUN_EXCEPTIONS, NOUN_INVARIANTS, SUFFIX_NOUNS, VERB_EXCEPTIONS,
};

const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "ive", "able", "ible", "ical", "ish"];

#[derive(Debug, Clone, Copy, Default)]
pub struct PosTagger;

impl PosTagger {
    pub fn new() -> Self {
        Self
    }

    /// Tag a sequence of lowercase tokens. Output is aligned with the input.
    pub fn tag<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<&'static str> {
        let mut tags: Vec<&'static str> =
            tokens.iter().map(|t| lexical_tag(t.as_ref())).collect();

        for i in 1..tags.len() {
            if tags[i] != "VBG" {
                continue;
            }
            let word = tokens[i].as_ref();
            let prev = tags[i - 1];
            let compound = ING_COMPOUND_HEADS.contains(word) && matches!(prev, "NN" | "NNP");
            if prev.starts_with("JJ") || compound {
                trace!(word, prev, "gerund read as noun");
                tags[i] = "NN";
            }
        }
        tags
    }
}

/// Context-free tag for a single token.
fn lexical_tag(word: &str) -> &'static str {
    if let Some(tag) = CLOSED_CLASS.get(word) {
        return *tag;
    }
    if !word.is_empty() && word.chars().all(|c| c.is_numeric()) {
        return "CD";
    }
    if ADVERBS.contains(word) {
        return "RB";
    }
    if ADJECTIVES.contains(word) {
        return "JJ";
    }
    if VERB_EXCEPTIONS.contains_key(word) {
        return "VBD";
    }
    if NOUN_EXCEPTIONS.contains_key(word) {
        return "NNS";
    }
    if NOUN_INVARIANTS.contains(word) {
        return "NN";
    }
    if comparative_base(word).is_some() {
        return if word.ends_with("est") { "JJS" } else { "JJR" };
    }

    let len = word.chars().count();

    if word.ends_with("ly") && len > 3 {
        if LY_NOUNS.contains(word) {
            return "NN";
        }
        if LY_VERBS.contains(word) {
            return "VB";
        }
        return "RB";
    }
    if let Some(stem) = word.strip_suffix("ing") {
        if ING_NOUNS.contains(word) {
            return "NN";
        }
        if len > 4 && stem.chars().any(|c| "aeiouy".contains(c)) {
            return "VBG";
        }
    }
    if word.ends_with("ed") && len >= 4 {
        if EED_BASES.contains(word) {
            return "VB";
        }
        return "VBN";
    }
    if word.ends_with("ous") || word.ends_with("less") {
        return "JJ";
    }
    if word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
        && len > 3
    {
        return "NNS";
    }
    if len > 4 {
        if ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return "JJ";
        }
        if (word.ends_with("al") || word.ends_with("ic")) && !SUFFIX_NOUNS.contains(word) {
            return "JJ";
        }
        if word.ends_with("ize") || word.ends_with("ify") {
            return "VB";
        }
    }
    "NN"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(text: &str) -> Vec<&'static str> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        PosTagger::new().tag(&tokens)
    }

    #[test]
    fn test_closed_class() {
        assert_eq!(tag("the cats"), vec!["DT", "NNS"]);
        assert_eq!(tag("via"), vec!["IN"]);
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(tag("quickly"), vec!["RB"]);
        assert_eq!(tag("running"), vec!["VBG"]);
        assert_eq!(tag("proposed"), vec!["VBN"]);
        assert_eq!(tag("need"), vec!["VB"]);
        assert_eq!(tag("proceed"), vec!["VB"]);
        assert_eq!(tag("numerous"), vec!["JJ"]);
        assert_eq!(tag("statistical"), vec!["JJ"]);
        assert_eq!(tag("proposal"), vec!["NN"]);
        assert_eq!(tag("optimize"), vec!["VB"]);
        assert_eq!(tag("larger"), vec!["JJR"]);
        assert_eq!(tag("largest"), vec!["JJS"]);
        assert_eq!(tag("family"), vec!["NN"]);
        assert_eq!(tag("apply"), vec!["VB"]);
        assert_eq!(tag("analysis"), vec!["NN"]);
        assert_eq!(tag("model"), vec!["NN"]);
    }

    #[test]
    fn test_lexicon_entries() {
        assert_eq!(tag("built"), vec!["VBD"]);
        assert_eq!(tag("children"), vec!["NNS"]);
        assert_eq!(tag("novel"), vec!["JJ"]);
        assert_eq!(tag("however"), vec!["RB"]);
        assert_eq!(tag("2021"), vec!["CD"]);
    }

    #[test]
    fn test_gerund_in_noun_phrase() {
        assert_eq!(tag("machine learning"), vec!["NN", "NN"]);
        assert_eq!(tag("deep learning"), vec!["JJ", "NN"]);
        assert_eq!(tag("cats running"), vec!["NNS", "VBG"]);
        assert_eq!(tag("learning"), vec!["VBG"]);
    }

    #[test]
    fn test_empty() {
        let empty: Vec<&str> = Vec::new();
        assert!(PosTagger::new().tag(&empty).is_empty());
    }
}
