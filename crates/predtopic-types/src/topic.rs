//! Topic data types.
//!
//! Topic ids are dense integers scoped to one modeling technique: topic 3 of
//! the LDA model and topic 3 of the BERTopic model are unrelated.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypesError;

/// Index of a topic within its model's topic space.
pub type TopicId = usize;

/// Index of a token in a model vocabulary.
pub type TokenId = usize;

/// Which modeling technique produced a topic space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Lda,
    #[default]
    Bertopic,
}

impl ModelKind {
    /// Display name used in headlines.
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelKind::Lda => "LDA",
            ModelKind::Bertopic => "BERTopic",
        }
    }

    /// Both model kinds, in selector order.
    pub fn all() -> &'static [ModelKind] {
        &[ModelKind::Bertopic, ModelKind::Lda]
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ModelKind {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lda" => Ok(ModelKind::Lda),
            "bertopic" => Ok(ModelKind::Bertopic),
            other => Err(TypesError::UnknownModel(other.to_string())),
        }
    }
}

/// A topic with its ranked representative words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    /// Human-readable name, e.g. "0_data_learning_model"
    pub name: String,
    /// (word, weight) pairs, highest weight first
    pub representative_words: Vec<(String, f64)>,
}

impl Topic {
    pub fn new(id: TopicId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            representative_words: Vec::new(),
        }
    }

    pub fn with_words(mut self, words: Vec<(String, f64)>) -> Self {
        self.representative_words = words;
        self
    }

    /// Label in the "Topic N" form used by selectors and legends.
    pub fn label(&self) -> String {
        topic_label(self.id)
    }
}

/// "Topic N" label for a topic id.
pub fn topic_label(topic_id: TopicId) -> String {
    format!("Topic {}", topic_id)
}

/// Parse a "Topic N" label back to its id.
pub fn parse_topic_label(label: &str) -> Option<TopicId> {
    label.trim().strip_prefix("Topic ")?.trim().parse().ok()
}

/// Primary topic of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicAssignment {
    pub document_id: usize,
    pub topic_id: TopicId,
    /// Probability in [0, 1]; 1.0 when the technique exposes none
    pub probability: f64,
}

impl TopicAssignment {
    /// Create an assignment, clamping the probability into [0, 1].
    pub fn new(document_id: usize, topic_id: TopicId, probability: f64) -> Self {
        Self {
            document_id,
            topic_id,
            probability: clamp_probability(probability),
        }
    }

    /// Assignment for a technique without per-document probabilities.
    pub fn certain(document_id: usize, topic_id: TopicId) -> Self {
        Self::new(document_id, topic_id, 1.0)
    }
}

/// Topic probabilities for one document, sorted by probability descending.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TopicDistribution(Vec<(TopicId, f64)>);

impl TopicDistribution {
    /// Build a distribution; entries are clamped and sorted descending.
    /// Ties keep the lower topic id first.
    pub fn new(mut entries: Vec<(TopicId, f64)>) -> Self {
        for entry in entries.iter_mut() {
            entry.1 = clamp_probability(entry.1);
        }
        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        Self(entries)
    }

    /// Most probable topic.
    pub fn top(&self) -> Option<(TopicId, f64)> {
        self.0.first().copied()
    }

    pub fn entries(&self) -> &[(TopicId, f64)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Sum of all probabilities.
    pub fn total(&self) -> f64 {
        self.0.iter().map(|(_, p)| p).sum()
    }
}

/// Topics ranked by relevance for one vocabulary token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTopics {
    pub token_id: TokenId,
    /// Most relevant topic first; may be empty
    pub topics: Vec<TopicId>,
}

impl WordTopics {
    pub fn new(token_id: TokenId, topics: Vec<TopicId>) -> Self {
        Self { token_id, topics }
    }

    /// Top-ranked topic, if any.
    pub fn top(&self) -> Option<TopicId> {
        self.topics.first().copied()
    }
}

/// Per-word topic breakdown of one document, in vocabulary-id order.
pub type PerWordTopics = Vec<WordTopics>;

/// Outcome of classifying a new piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub model: ModelKind,
    pub topic_id: TopicId,
    pub probability: f64,
    pub distribution: TopicDistribution,
    /// Only populated by techniques that expose word-level assignments
    #[serde(default)]
    pub per_word_topics: PerWordTopics,
}

impl Prediction {
    pub fn new(model: ModelKind, topic_id: TopicId, probability: f64) -> Self {
        let probability = clamp_probability(probability);
        Self {
            model,
            topic_id,
            probability,
            distribution: TopicDistribution::new(vec![(topic_id, probability)]),
            per_word_topics: Vec::new(),
        }
    }

    /// Build a prediction from a full distribution. The top entry becomes the
    /// predicted topic.
    pub fn from_distribution(
        model: ModelKind,
        distribution: TopicDistribution,
        per_word_topics: PerWordTopics,
    ) -> Option<Self> {
        let (topic_id, probability) = distribution.top()?;
        Some(Self {
            model,
            topic_id,
            probability,
            distribution,
            per_word_topics,
        })
    }

    /// Probability as a percentage with two decimals, e.g. "73.21".
    pub fn percent(&self) -> String {
        format!("{:.2}", self.probability * 100.0)
    }
}

fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}
