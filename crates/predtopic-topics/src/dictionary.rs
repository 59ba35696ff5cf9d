//! Token dictionary of the LDA model.
//!
//! Maps lemmas to the integer ids used by the topic-word matrix. The on-disk
//! form is a JSON array of tokens indexed by id.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use tracing::{debug, info};

use predtopic_types::TokenId;

use crate::error::TopicsError;

/// Resolve a token id to its surface form.
pub trait TokenLookup {
    fn token(&self, id: TokenId) -> Option<&str>;
}

impl TokenLookup for [String] {
    fn token(&self, id: TokenId) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

impl TokenLookup for Vec<String> {
    fn token(&self, id: TokenId) -> Option<&str> {
        self.as_slice().token(id)
    }
}

impl TokenLookup for HashMap<TokenId, String> {
    fn token(&self, id: TokenId) -> Option<&str> {
        self.get(&id).map(String::as_str)
    }
}

/// Fixed vocabulary with token <-> id lookup.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    id2token: Vec<String>,
    token2id: HashMap<String, TokenId>,
}

impl Vocabulary {
    /// Build from tokens in id order. Repeated tokens keep their first id.
    pub fn new(tokens: Vec<String>) -> Self {
        let mut token2id = HashMap::with_capacity(tokens.len());
        for (id, token) in tokens.iter().enumerate() {
            token2id.entry(token.clone()).or_insert(id);
        }
        Self {
            id2token: tokens,
            token2id,
        }
    }

    /// Load a JSON token array from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TopicsError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let tokens: Vec<String> = serde_json::from_slice(&bytes)?;
        info!(path = %path.display(), tokens = tokens.len(), "Loaded dictionary");
        Ok(Self::new(tokens))
    }

    pub fn len(&self) -> usize {
        self.id2token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id2token.is_empty()
    }

    pub fn id(&self, token: &str) -> Option<TokenId> {
        self.token2id.get(token).copied()
    }

    pub fn tokens(&self) -> &[String] {
        &self.id2token
    }

    /// Bag of words: (token id, count) pairs sorted by id. Unknown tokens are
    /// skipped.
    pub fn doc2bow<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<(TokenId, usize)> {
        let mut counts: BTreeMap<TokenId, usize> = BTreeMap::new();
        let mut unknown = 0usize;
        for token in tokens {
            match self.id(token.as_ref()) {
                Some(id) => *counts.entry(id).or_insert(0) += 1,
                None => unknown += 1,
            }
        }
        debug!(known = counts.len(), unknown, "Built bag of words");
        counts.into_iter().collect()
    }
}

impl TokenLookup for Vocabulary {
    fn token(&self, id: TokenId) -> Option<&str> {
        self.id2token.get(id).map(String::as_str)
    }
}
