//! Part-of-speech aware lemmatizer.
//!
//! Reduces an inflected word to its dictionary base form. Lookup order per
//! class: irregular-form table, invariant words, then suffix detachment rules.
//! Verb and adjective stems are checked against small base-word sets before
//! falling back to spelling heuristics (final `e` restoration, consonant
//! undoubling).

use predtopic_types::PartOfSpeech;

use crate::lexicon::{
    ADJ_EXCEPTIONS, ADV_EXCEPTIONS, CHE_NOUNS, COMPARABLE_ADJECTIVES, EED_BASES, E_VERBS,
    IE_PLURALS, NOUN_EXCEPTIONS, NOUN_INVARIANTS, NO_E_STEMS, VERB_EXCEPTIONS,
};

/// Dictionary-form lemmatizer. Stateless; cheap to construct.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lemmatizer;

impl Lemmatizer {
    pub fn new() -> Self {
        Self
    }

    /// Reduce a lowercase word to its base form under `pos`.
    ///
    /// Words the rules cannot reduce are returned unchanged.
    pub fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> String {
        match pos {
            PartOfSpeech::Noun => lemmatize_noun(word),
            PartOfSpeech::Verb => lemmatize_verb(word),
            PartOfSpeech::Adjective => lemmatize_adjective(word),
            PartOfSpeech::Adverb => lemmatize_adverb(word),
        }
    }
}

fn lemmatize_noun(word: &str) -> String {
    if let Some(base) = NOUN_EXCEPTIONS.get(word) {
        return base.to_string();
    }
    if word.chars().count() <= 3 || NOUN_INVARIANTS.contains(word) {
        return word.to_string();
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if IE_PLURALS.contains(word) || stem.chars().count() < 2 {
            return without_last(word);
        }
        return format!("{}y", stem);
    }
    if let Some(stem) = word.strip_suffix("es") {
        // processes -> process, but cases -> case
        if stem.ends_with("ss") || stem.ends_with('x') || stem.ends_with("zz") {
            return stem.to_string();
        }
        if stem.ends_with("ch") || stem.ends_with("sh") {
            if CHE_NOUNS.contains(without_last(word).as_str()) {
                return without_last(word);
            }
            return stem.to_string();
        }
    }
    if let Some(stem) = word.strip_suffix('s') {
        return stem.to_string();
    }
    word.to_string()
}

fn lemmatize_verb(word: &str) -> String {
    if let Some(base) = VERB_EXCEPTIONS.get(word) {
        return base.to_string();
    }
    if word.chars().count() <= 3 {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if stem.chars().count() < 2 {
            return without_last(word);
        }
        return format!("{}y", stem);
    }
    if let Some(stem) = word.strip_suffix("ied") {
        if stem.chars().count() < 2 {
            return without_last(word);
        }
        return format!("{}y", stem);
    }
    if let Some(stem) = word.strip_suffix("es") {
        if stem.ends_with("ss")
            || stem.ends_with("sh")
            || stem.ends_with('x')
            || stem.ends_with("zz")
        {
            return stem.to_string();
        }
        if stem.ends_with("ch") {
            if CHE_NOUNS.contains(without_last(word).as_str()) {
                return without_last(word);
            }
            return stem.to_string();
        }
        let with_e = without_last(word);
        // focuses -> focus, but uses -> use
        if stem.ends_with('s') && !E_VERBS.contains(with_e.as_str()) {
            return stem.to_string();
        }
        return with_e;
    }
    if word.ends_with('s') {
        if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
            return word.to_string();
        }
        return without_last(word);
    }
    if let Some(stem) = word.strip_suffix("ing") {
        if has_vowel(stem) && stem.chars().count() >= 2 {
            return base_from_stem(stem);
        }
        return word.to_string();
    }
    if word.ends_with("eed") {
        if EED_BASES.contains(word) {
            return word.to_string();
        }
        return without_last(word);
    }
    if let Some(stem) = word.strip_suffix("ed") {
        if has_vowel(stem) && stem.chars().count() >= 2 {
            return base_from_stem(stem);
        }
    }
    word.to_string()
}

fn lemmatize_adjective(word: &str) -> String {
    if let Some(base) = ADJ_EXCEPTIONS.get(word) {
        return base.to_string();
    }
    comparative_base(word).unwrap_or_else(|| word.to_string())
}

fn lemmatize_adverb(word: &str) -> String {
    ADV_EXCEPTIONS
        .get(word)
        .map(|base| base.to_string())
        .unwrap_or_else(|| word.to_string())
}

/// Base adjective of a regular comparative or superlative, if `word` is one.
///
/// Candidates are tried in order: bare stem, stem + `e`, `-ier` → `-y`,
/// undoubled stem. The first one that is a known comparable adjective wins.
pub fn comparative_base(word: &str) -> Option<String> {
    let stem = word
        .strip_suffix("est")
        .or_else(|| word.strip_suffix("er"))?;
    if stem.is_empty() {
        return None;
    }

    let mut candidates = vec![stem.to_string(), format!("{}e", stem)];
    if let Some(y_stem) = stem.strip_suffix('i') {
        candidates.push(format!("{}y", y_stem));
    }
    if let Some(undoubled) = undouble(stem) {
        candidates.push(undoubled);
    }

    candidates
        .into_iter()
        .find(|c| COMPARABLE_ADJECTIVES.contains(c.as_str()))
}

/// Recover a verb base from the stem left after removing `-ing` / `-ed`.
fn base_from_stem(stem: &str) -> String {
    let with_e = format!("{}e", stem);
    if E_VERBS.contains(with_e.as_str()) {
        return with_e;
    }
    if NO_E_STEMS.contains(stem) || stem.ends_with('e') {
        return stem.to_string();
    }
    if let Some(undoubled) = undouble(stem) {
        return undoubled;
    }
    if needs_final_e(stem) {
        return with_e;
    }
    stem.to_string()
}

/// Undo consonant doubling: `runn` → `run`, `embedd` → `embed`.
///
/// Only applies to consonants English doubles before a suffix, and only when
/// the doubled letter follows a single vowel that itself follows a consonant
/// (so `add` and `err` are left alone).
fn undouble(stem: &str) -> Option<String> {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n < 4 {
        return None;
    }
    let last = chars[n - 1];
    if last != chars[n - 2] || !"bdgmnprt".contains(last) {
        return None;
    }
    let vowel = chars[n - 3];
    let before = chars[n - 4];
    if is_vowel(vowel) && !is_vowel(before) {
        return Some(chars[..n - 1].iter().collect());
    }
    None
}

/// Spelling heuristics for stems whose base form ends in a silent `e`.
fn needs_final_e(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n < 2 {
        return false;
    }
    let last = chars[n - 1];
    let prev = chars[n - 2];
    let prev2 = if n >= 3 { Some(chars[n - 3]) } else { None };
    let consonant_before = |c: Option<char>| c.is_some_and(|c| c.is_alphabetic() && !is_vowel(c));

    // generat, creat (but not eat, treat)
    if last == 't' && prev == 'a' && consonant_before(prev2) {
        return true;
    }
    // optimiz, analyz
    if last == 'z' && (prev == 'i' || prev == 'y') {
        return true;
    }
    // solv, improv, reduc, produc
    if last == 'v' || last == 'c' {
        return true;
    }
    // merg, judg, bulg
    if last == 'g' && matches!(prev, 'r' | 'd' | 'l') {
        return true;
    }
    // chang, challeng
    if last == 'g' && prev == 'n' && matches!(prev2, Some('a') | Some('e')) {
        return true;
    }
    // enabl, sampl, handl
    if last == 'l' && "bcdfgkptz".contains(prev) {
        return true;
    }
    // measur, comput, provid, includ, defin, requir
    if !is_vowel(prev) {
        return is_single_syllable_cvc(&chars);
    }
    let single_vowel = !prev2.is_some_and(is_vowel);
    match last {
        'r' if prev == 'u' || prev == 'a' || prev == 'i' => {
            single_vowel || (prev == 'i' && prev2 == Some('u'))
        }
        't' if prev == 'u' => single_vowel,
        'd' => single_vowel && prev2.is_some(),
        'n' if prev == 'i' => single_vowel && prev2.is_some(),
        's' => {
            // caus, releas, rais, noise
            if matches!(
                (prev2, prev),
                (Some('a'), 'u') | (Some('e'), 'a') | (Some('a'), 'i') | (Some('o'), 'i')
            ) {
                return true;
            }
            single_vowel
        }
        _ => is_single_syllable_cvc(&chars),
    }
}

/// One short vowel closed by one consonant (`mak`, `us`, `typ`). Monosyllabic
/// verbs of that shape double their consonant before a suffix, so an
/// undoubled stem of this shape must have lost an `e`.
fn is_single_syllable_cvc(chars: &[char]) -> bool {
    let n = chars.len();
    if n < 2 {
        return false;
    }
    let last = chars[n - 1];
    if is_vowel_at(chars, n - 1) || matches!(last, 'w' | 'x' | 'y') {
        return false;
    }
    if !is_vowel_at(chars, n - 2) {
        return false;
    }
    if n >= 3 && is_vowel_at(chars, n - 3) {
        return false;
    }
    vowel_groups(chars) == 1
}

fn vowel_groups(chars: &[char]) -> usize {
    let mut groups = 0;
    let mut in_group = false;
    for i in 0..chars.len() {
        if is_vowel_at(chars, i) {
            if !in_group {
                groups += 1;
            }
            in_group = true;
        } else {
            in_group = false;
        }
    }
    groups
}

/// `y` counts as a vowel after a consonant.
fn is_vowel_at(chars: &[char], i: usize) -> bool {
    let c = chars[i];
    if is_vowel(c) {
        return true;
    }
    c == 'y' && i > 0 && !is_vowel(chars[i - 1])
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn has_vowel(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    (0..chars.len()).any(|i| is_vowel_at(&chars, i))
}

fn without_last(word: &str) -> String {
    let mut s = word.to_string();
    s.pop();
    s
}
