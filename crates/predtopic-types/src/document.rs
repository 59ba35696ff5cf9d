//! Research article metadata.
//!
//! Documents are loaded once from the prepared data table and never mutated.

use serde::{Deserialize, Serialize};

/// A research article from the corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Row index in the prepared data table
    pub id: usize,

    /// Publication year
    pub year: i32,

    /// Article title
    pub title: String,

    /// Article abstract
    #[serde(rename = "abstract")]
    pub abstract_text: String,

    /// Digital Object Identifier (without the resolver prefix)
    pub doi: String,

    /// Full text used for modeling (title + abstract + keywords, pre-joined)
    pub raw_text: String,

    /// Author-supplied keywords, empty when the article has none
    #[serde(default)]
    pub author_keywords: String,
}

impl Document {
    /// Create a new document.
    pub fn new(
        id: usize,
        year: i32,
        title: String,
        abstract_text: String,
        doi: String,
        raw_text: String,
    ) -> Self {
        Self {
            id,
            year,
            title,
            abstract_text,
            doi,
            raw_text,
            author_keywords: String::new(),
        }
    }

    /// Attach author keywords
    pub fn with_author_keywords(mut self, keywords: String) -> Self {
        self.author_keywords = keywords;
        self
    }

    /// Resolver URL for the DOI.
    pub fn doi_url(&self) -> String {
        format!("https://doi.org/{}", self.doi)
    }

    /// Whether the article carries author keywords.
    pub fn has_author_keywords(&self) -> bool {
        !self.author_keywords.trim().is_empty()
    }
}
