//! Pretrained BERTopic topic representations.
//!
//! Each topic carries its class-based TF-IDF word weights. New text is
//! assigned to the topic whose weights are most similar (cosine) to the
//! text's lemma counts.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use predtopic_text::TextNormalizer;
use predtopic_types::{ModelKind, Prediction, TopicDistribution, TopicId};

use crate::error::TopicsError;
use crate::model::TopicModel;
use crate::similarity::sparse_cosine;

/// One topic as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BertopicTopic {
    pub id: TopicId,
    pub name: String,
    /// Documents assigned to the topic during training
    #[serde(default)]
    pub count: usize,
    /// (word, c-TF-IDF weight), highest first
    pub words: Vec<(String, f64)>,
}

/// On-disk form of the BERTopic model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BertopicModelFile {
    pub topics: Vec<BertopicTopic>,
}

/// Pretrained BERTopic model.
pub struct BertopicModel {
    topics: Vec<BertopicTopic>,
    weights: Vec<HashMap<String, f64>>,
    normalizer: TextNormalizer,
}

impl BertopicModel {
    /// Build from topic representations. Ids must be dense from 0.
    pub fn new(file: BertopicModelFile) -> Result<Self, TopicsError> {
        let mut topics = file.topics;
        if topics.is_empty() {
            return Err(TopicsError::InvalidModel("model has no topics".to_string()));
        }
        topics.sort_by_key(|t| t.id);
        for (expected, topic) in topics.iter().enumerate() {
            if topic.id != expected {
                return Err(TopicsError::InvalidModel(format!(
                    "topic ids must be dense from 0, found {} at position {}",
                    topic.id, expected
                )));
            }
        }
        for topic in topics.iter_mut() {
            topic.words.sort_by(|a, b| {
                b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal)
            });
        }

        let weights = topics
            .iter()
            .map(|t| t.words.iter().cloned().collect::<HashMap<String, f64>>())
            .collect();

        Ok(Self {
            topics,
            weights,
            normalizer: TextNormalizer::new(),
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TopicsError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let file: BertopicModelFile = serde_json::from_slice(&bytes)?;
        let model = Self::new(file)?;
        info!(path = %path.display(), num_topics = model.topics.len(), "Loaded BERTopic model");
        Ok(model)
    }

    pub fn with_normalizer(mut self, normalizer: TextNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn topics(&self) -> &[BertopicTopic] {
        &self.topics
    }

    /// Topic with the most training documents, lowest id on ties.
    pub fn largest_topic(&self) -> TopicId {
        self.topics
            .iter()
            .fold((0, 0usize), |best, t| {
                if t.count > best.1 {
                    (t.id, t.count)
                } else {
                    best
                }
            })
            .0
    }

    /// Similarity of the text's lemma counts to every topic, in id order.
    pub fn similarities(&self, text: &str) -> Vec<f64> {
        let mut counts: HashMap<String, f64> = HashMap::new();
        for lemma in self.normalizer.lemmas(text) {
            *counts.entry(lemma).or_insert(0.0) += 1.0;
        }
        self.weights
            .iter()
            .map(|w| sparse_cosine(&counts, w).clamp(0.0, 1.0))
            .collect()
    }
}

impl TopicModel for BertopicModel {
    fn kind(&self) -> ModelKind {
        ModelKind::Bertopic
    }

    fn num_topics(&self) -> usize {
        self.topics.len()
    }

    fn top_words(&self, topic_id: TopicId, n: usize) -> Result<Vec<(String, f64)>, TopicsError> {
        self.check_topic(topic_id)?;
        Ok(self.topics[topic_id].words.iter().take(n).cloned().collect())
    }

    fn topic_name(&self, topic_id: TopicId) -> Result<String, TopicsError> {
        self.check_topic(topic_id)?;
        Ok(self.topics[topic_id].name.clone())
    }

    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    fn predict(&self, text: &str) -> Result<Prediction, TopicsError> {
        let sims = self.similarities(text);
        let entries: Vec<(TopicId, f64)> = sims
            .iter()
            .enumerate()
            .filter(|(_, s)| **s > 0.0)
            .map(|(t, s)| (t, *s))
            .collect();

        if entries.is_empty() {
            let fallback = self.largest_topic();
            warn!(topic_id = fallback, "No overlap with any topic, using largest topic");
            return Ok(Prediction::new(ModelKind::Bertopic, fallback, 0.0));
        }

        let distribution = TopicDistribution::new(entries);
        let prediction =
            Prediction::from_distribution(ModelKind::Bertopic, distribution, Vec::new())
                .ok_or_else(|| TopicsError::InvalidModel("empty topic distribution".to_string()))?;
        debug!(
            topic_id = prediction.topic_id,
            probability = prediction.probability,
            "BERTopic assignment"
        );
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
        pairs.iter().map(|(w, s)| (w.to_string(), *s)).collect()
    }

    fn model() -> BertopicModel {
        BertopicModel::new(BertopicModelFile {
            topics: vec![
                BertopicTopic {
                    id: 1,
                    name: "1_security_attack_network".to_string(),
                    count: 80,
                    words: words(&[("attack", 0.3), ("security", 0.5), ("network", 0.2)]),
                },
                BertopicTopic {
                    id: 0,
                    name: "0_learning_model_data".to_string(),
                    count: 120,
                    words: words(&[("learning", 0.5), ("model", 0.4), ("data", 0.3)]),
                },
            ],
        })
        .unwrap()
    }

    #[test]
    fn test_topics_sorted_by_id_and_weight() {
        let model = model();
        assert_eq!(model.num_topics(), 2);
        assert_eq!(model.topics()[0].id, 0);
        assert_eq!(
            model.top_words(1, 2).unwrap(),
            words(&[("security", 0.5), ("attack", 0.3)])
        );
        assert_eq!(model.topic_name(1).unwrap(), "1_security_attack_network");
    }

    #[test]
    fn test_predict() {
        let model = model();
        let prediction = model
            .predict("Detecting attacks on network security with anomaly scores")
            .unwrap();
        assert_eq!(prediction.model, ModelKind::Bertopic);
        assert_eq!(prediction.topic_id, 1);
        assert!(prediction.probability > 0.0 && prediction.probability <= 1.0);
        assert!(prediction.per_word_topics.is_empty());

        let (topic, _) = model.assign("A data model for learning").unwrap();
        assert_eq!(topic, 0);
    }

    #[test]
    fn test_no_overlap_falls_back_to_largest() {
        let model = model();
        let prediction = model.predict("quantum chemistry").unwrap();
        assert_eq!(prediction.topic_id, 0);
        assert_eq!(prediction.probability, 0.0);
    }

    #[test]
    fn test_tie_prefers_lower_id() {
        let model = BertopicModel::new(BertopicModelFile {
            topics: vec![
                BertopicTopic {
                    id: 0,
                    name: "0_data".to_string(),
                    count: 1,
                    words: words(&[("data", 1.0)]),
                },
                BertopicTopic {
                    id: 1,
                    name: "1_data".to_string(),
                    count: 5,
                    words: words(&[("data", 1.0)]),
                },
            ],
        })
        .unwrap();
        assert_eq!(model.assign("data").unwrap().0, 0);
        assert_eq!(model.largest_topic(), 1);
    }

    #[test]
    fn test_invalid_ids() {
        let result = BertopicModel::new(BertopicModelFile {
            topics: vec![BertopicTopic {
                id: 3,
                name: "3_x".to_string(),
                count: 1,
                words: Vec::new(),
            }],
        });
        assert!(matches!(result, Err(TopicsError::InvalidModel(_))));
        assert!(BertopicModel::new(BertopicModelFile { topics: Vec::new() }).is_err());
    }

    #[test]
    fn test_unknown_topic() {
        let model = model();
        assert!(matches!(model.top_words(7, 3), Err(TopicsError::NotFound(_))));
    }

    #[test]
    fn test_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("topics.json");
        std::fs::write(
            &path,
            r#"{"topics": [{"id": 0, "name": "0_graph", "count": 3, "words": [["graph", 0.9]]}]}"#,
        )
        .unwrap();
        let model = BertopicModel::load(&path).unwrap();
        assert_eq!(model.topic_name(0).unwrap(), "0_graph");
    }
}
