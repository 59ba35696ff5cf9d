//! Pretrained LDA model with single-document variational inference.
//!
//! The model file stores the variational topic-word parameters (`lambda`,
//! one row per topic over the vocabulary) and the document-topic prior
//! (`alpha`). Inference for a new document runs the standard E-step:
//!
//! ```text
//! gamma_k  <- alpha_k + sum_w n_w * phi_wk
//! phi_wk   ∝ exp(E[log theta_k]) * exp(E[log beta_kw])
//! ```
//!
//! until the mean change in gamma drops below the configured threshold.

use std::path::Path;

use serde::{Deserialize, Serialize};
use statrs::function::gamma::digamma;
use tracing::{debug, info, instrument, warn};

use predtopic_text::TextNormalizer;
use predtopic_types::{
    ModelKind, PerWordTopics, Prediction, TokenId, TopicDistribution, TopicId, WordTopics,
};

use crate::config::InferenceConfig;
use crate::dictionary::{TokenLookup, Vocabulary};
use crate::error::TopicsError;
use crate::model::TopicModel;
use crate::similarity::normalize_sum;

/// Dirichlet prior, either one value for all topics or one per topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prior {
    Symmetric(f64),
    PerTopic(Vec<f64>),
}

impl Prior {
    fn expand(&self, num_topics: usize) -> Result<Vec<f64>, TopicsError> {
        let values = match self {
            Prior::Symmetric(a) => vec![*a; num_topics],
            Prior::PerTopic(values) => values.clone(),
        };
        if values.len() != num_topics {
            return Err(TopicsError::InvalidModel(format!(
                "alpha has {} entries, expected {}",
                values.len(),
                num_topics
            )));
        }
        if values.iter().any(|a| !a.is_finite() || *a <= 0.0) {
            return Err(TopicsError::InvalidModel(
                "alpha must be positive".to_string(),
            ));
        }
        Ok(values)
    }
}

/// On-disk form of the LDA model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LdaModelFile {
    pub num_topics: usize,
    pub alpha: Prior,
    /// Topic-word variational parameters, `num_topics` rows of vocabulary length
    pub lambda: Vec<Vec<f64>>,
}

/// Result of the E-step for one document.
#[derive(Debug, Clone)]
pub struct Inference {
    /// Variational Dirichlet parameters of the document-topic distribution
    pub gamma: Vec<f64>,
    /// Count-weighted topic responsibilities per bag-of-words entry:
    /// `phi[i][k]` for the i-th `(token_id, count)` pair
    pub phi: Vec<Vec<f64>>,
    /// Iterations run before convergence (or the cap)
    pub iterations: usize,
}

/// Pretrained LDA model.
pub struct LdaModel {
    num_topics: usize,
    alpha: Vec<f64>,
    /// lambda rows normalized to sum to 1
    topic_word: Vec<Vec<f64>>,
    /// exp(E[log beta]) per topic and token
    exp_elog_beta: Vec<Vec<f64>>,
    vocabulary: Vocabulary,
    normalizer: TextNormalizer,
    config: InferenceConfig,
}

impl LdaModel {
    /// Build a model from its parameters and dictionary.
    pub fn new(file: LdaModelFile, vocabulary: Vocabulary) -> Result<Self, TopicsError> {
        let num_topics = file.num_topics;
        if num_topics == 0 {
            return Err(TopicsError::InvalidModel(
                "num_topics must be > 0".to_string(),
            ));
        }
        if file.lambda.len() != num_topics {
            return Err(TopicsError::InvalidModel(format!(
                "lambda has {} rows, expected {}",
                file.lambda.len(),
                num_topics
            )));
        }
        for (k, row) in file.lambda.iter().enumerate() {
            if row.len() != vocabulary.len() {
                return Err(TopicsError::InvalidModel(format!(
                    "lambda row {} has {} columns, dictionary has {} tokens",
                    k,
                    row.len(),
                    vocabulary.len()
                )));
            }
            if row.iter().any(|v| !v.is_finite() || *v <= 0.0) {
                return Err(TopicsError::InvalidModel(format!(
                    "lambda row {} has non-positive entries",
                    k
                )));
            }
        }
        let alpha = file.alpha.expand(num_topics)?;

        let exp_elog_beta: Vec<Vec<f64>> = file
            .lambda
            .iter()
            .map(|row| dirichlet_expectation(row).into_iter().map(f64::exp).collect())
            .collect();
        let topic_word: Vec<Vec<f64>> = file
            .lambda
            .into_iter()
            .map(|mut row| {
                normalize_sum(&mut row);
                row
            })
            .collect();

        Ok(Self {
            num_topics,
            alpha,
            topic_word,
            exp_elog_beta,
            vocabulary,
            normalizer: TextNormalizer::new(),
            config: InferenceConfig::default(),
        })
    }

    /// Load the model file and its dictionary.
    pub fn load(
        model_path: impl AsRef<Path>,
        dictionary_path: impl AsRef<Path>,
    ) -> Result<Self, TopicsError> {
        let model_path = model_path.as_ref();
        let bytes = std::fs::read(model_path)?;
        let file: LdaModelFile = serde_json::from_slice(&bytes)?;
        let vocabulary = Vocabulary::load(dictionary_path)?;
        let model = Self::new(file, vocabulary)?;
        info!(
            path = %model_path.display(),
            num_topics = model.num_topics,
            vocabulary = model.vocabulary.len(),
            "Loaded LDA model"
        );
        Ok(model)
    }

    pub fn with_config(mut self, config: InferenceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_normalizer(mut self, normalizer: TextNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Run the E-step on a bag of words. Token ids outside the vocabulary are
    /// ignored.
    pub fn infer(&self, bow: &[(TokenId, usize)]) -> Inference {
        let k = self.num_topics;
        let bow: Vec<(TokenId, f64)> = bow
            .iter()
            .filter(|(id, count)| *id < self.vocabulary.len() && *count > 0)
            .map(|(id, count)| (*id, *count as f64))
            .collect();
        let doc_len: f64 = bow.iter().map(|(_, c)| c).sum();

        let mut gamma: Vec<f64> = self.alpha.iter().map(|a| a + doc_len / k as f64).collect();
        let mut exp_elog_theta: Vec<f64> = dirichlet_expectation(&gamma)
            .into_iter()
            .map(f64::exp)
            .collect();
        let mut phinorm = self.phinorm(&bow, &exp_elog_theta);

        let mut iterations = 0;
        for _ in 0..self.config.iterations {
            iterations += 1;
            let last_gamma = gamma.clone();

            for t in 0..k {
                let weighted: f64 = bow
                    .iter()
                    .zip(phinorm.iter())
                    .map(|((id, count), norm)| count / norm * self.exp_elog_beta[t][*id])
                    .sum();
                gamma[t] = self.alpha[t] + exp_elog_theta[t] * weighted;
            }

            exp_elog_theta = dirichlet_expectation(&gamma)
                .into_iter()
                .map(f64::exp)
                .collect();
            phinorm = self.phinorm(&bow, &exp_elog_theta);

            let mean_change: f64 = gamma
                .iter()
                .zip(last_gamma.iter())
                .map(|(g, l)| (g - l).abs())
                .sum::<f64>()
                / k as f64;
            if mean_change < self.config.gamma_threshold {
                break;
            }
        }

        let phi: Vec<Vec<f64>> = bow
            .iter()
            .zip(phinorm.iter())
            .map(|((id, count), norm)| {
                (0..k)
                    .map(|t| exp_elog_theta[t] * count * self.exp_elog_beta[t][*id] / norm)
                    .collect()
            })
            .collect();

        debug!(iterations, words = bow.len(), "LDA inference finished");
        Inference {
            gamma,
            phi,
            iterations,
        }
    }

    /// Normalizer of the word-topic responsibilities for each word.
    fn phinorm(&self, bow: &[(TokenId, f64)], exp_elog_theta: &[f64]) -> Vec<f64> {
        bow.iter()
            .map(|(id, _)| {
                exp_elog_theta
                    .iter()
                    .zip(self.exp_elog_beta.iter())
                    .map(|(theta, beta)| theta * beta[*id])
                    .sum::<f64>()
                    + 1e-100
            })
            .collect()
    }

    /// Topic distribution and per-word topics of a bag of words.
    ///
    /// Topics below `minimum_probability` are dropped. Each word lists the
    /// topics whose responsibility reaches `minimum_phi_value`, most relevant
    /// first.
    pub fn document_topics(
        &self,
        bow: &[(TokenId, usize)],
    ) -> (TopicDistribution, PerWordTopics) {
        let inference = self.infer(bow);
        let mut theta = inference.gamma.clone();
        normalize_sum(&mut theta);

        let min_probability = self.config.minimum_probability.max(1e-8);
        let mut entries: Vec<(TopicId, f64)> = theta
            .iter()
            .enumerate()
            .filter(|(_, p)| **p >= min_probability)
            .map(|(t, p)| (t, *p))
            .collect();
        if entries.is_empty() {
            warn!("No topic above minimum probability, keeping the most probable one");
            let top = theta
                .iter()
                .enumerate()
                .fold((0, f64::MIN), |best, (t, p)| {
                    if *p > best.1 {
                        (t, *p)
                    } else {
                        best
                    }
                });
            entries.push(top);
        }

        let min_phi = self.config.minimum_phi_value.max(1e-8);
        let known: Vec<TokenId> = bow
            .iter()
            .filter(|(id, count)| *id < self.vocabulary.len() && *count > 0)
            .map(|(id, _)| *id)
            .collect();
        let per_word_topics: PerWordTopics = known
            .iter()
            .zip(inference.phi.iter())
            .map(|(id, phi)| {
                let mut ranked: Vec<(TopicId, f64)> = phi
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| **v >= min_phi)
                    .map(|(t, v)| (t, *v))
                    .collect();
                ranked.sort_by(|a, b| {
                    b.1.partial_cmp(&a.1)
                        .unwrap_or(std::cmp::Ordering::Equal)
                        .then(a.0.cmp(&b.0))
                });
                WordTopics::new(*id, ranked.into_iter().map(|(t, _)| t).collect())
            })
            .collect();

        (TopicDistribution::new(entries), per_word_topics)
    }

    /// Top words of a topic by normalized weight.
    pub fn show_topic(
        &self,
        topic_id: TopicId,
        topn: usize,
    ) -> Result<Vec<(String, f64)>, TopicsError> {
        self.check_topic(topic_id)?;
        let mut weights: Vec<(TokenId, f64)> = self.topic_word[topic_id]
            .iter()
            .copied()
            .enumerate()
            .collect();
        weights.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        Ok(weights
            .into_iter()
            .take(topn)
            .filter_map(|(id, w)| self.vocabulary.token(id).map(|t| (t.to_string(), w)))
            .collect())
    }
}

impl TopicModel for LdaModel {
    fn kind(&self) -> ModelKind {
        ModelKind::Lda
    }

    fn num_topics(&self) -> usize {
        self.num_topics
    }

    fn top_words(&self, topic_id: TopicId, n: usize) -> Result<Vec<(String, f64)>, TopicsError> {
        self.show_topic(topic_id, n)
    }

    fn token_lookup(&self) -> Option<&dyn TokenLookup> {
        Some(&self.vocabulary)
    }

    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    fn predict(&self, text: &str) -> Result<Prediction, TopicsError> {
        let lemmas = self.normalizer.lemmas(text);
        let bow = self.vocabulary.doc2bow(&lemmas);
        if bow.is_empty() {
            warn!("No known words in input, prediction falls back to the prior");
        }
        let (distribution, per_word_topics) = self.document_topics(&bow);
        Prediction::from_distribution(ModelKind::Lda, distribution, per_word_topics)
            .ok_or_else(|| TopicsError::InvalidModel("empty topic distribution".to_string()))
    }
}

/// E[log X] for X ~ Dirichlet(params).
fn dirichlet_expectation(params: &[f64]) -> Vec<f64> {
    let total = digamma(params.iter().sum());
    params.iter().map(|p| digamma(*p) - total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(
            ["data", "learning", "network", "protein", "cell", "gene"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    fn model() -> LdaModel {
        let file = LdaModelFile {
            num_topics: 2,
            alpha: Prior::Symmetric(0.5),
            lambda: vec![
                vec![50.0, 40.0, 30.0, 0.5, 0.5, 0.5],
                vec![0.5, 0.5, 0.5, 50.0, 40.0, 30.0],
            ],
        };
        LdaModel::new(file, vocabulary()).unwrap()
    }

    #[test]
    fn test_predict_dominant_topic() {
        let model = model();
        let prediction = model
            .predict("Proteins in the cell regulate gene expression")
            .unwrap();
        assert_eq!(prediction.model, ModelKind::Lda);
        assert_eq!(prediction.topic_id, 1);
        assert!(prediction.probability > 0.5);

        let prediction = model.predict("Deep learning on network data").unwrap();
        assert_eq!(prediction.topic_id, 0);
    }

    #[test]
    fn test_distribution_sums_to_one() {
        let model = model().with_config(InferenceConfig {
            minimum_probability: 0.0,
            ..InferenceConfig::default()
        });
        let bow = model.vocabulary().doc2bow(&["data", "gene", "cell"]);
        let (distribution, _) = model.document_topics(&bow);
        assert_eq!(distribution.len(), 2);
        assert!((distribution.total() - 1.0).abs() < 1e-6);
        assert_eq!(distribution.top().unwrap().0, 1);
    }

    #[test]
    fn test_per_word_topics() {
        let model = model();
        let bow = model.vocabulary().doc2bow(&["data", "protein", "protein"]);
        let (_, per_word) = model.document_topics(&bow);
        assert_eq!(per_word.len(), 2);
        assert_eq!(per_word[0].token_id, 0);
        assert_eq!(per_word[0].top(), Some(0));
        assert_eq!(per_word[1].token_id, 3);
        assert_eq!(per_word[1].top(), Some(1));
    }

    #[test]
    fn test_inference_converges() {
        let model = model();
        let bow = model.vocabulary().doc2bow(&["protein", "cell"]);
        let inference = model.infer(&bow);
        assert!(inference.iterations < model.config().iterations);
        assert_eq!(inference.gamma.len(), 2);
        assert_eq!(inference.phi.len(), 2);
    }

    #[test]
    fn test_empty_input_uses_prior() {
        let model = model();
        let prediction = model.predict("zzz qqq").unwrap();
        assert!(prediction.per_word_topics.is_empty());
        assert_eq!(prediction.topic_id, 0);
        assert!((prediction.probability - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_show_topic() {
        let model = model();
        let words = model.show_topic(0, 3).unwrap();
        let names: Vec<&str> = words.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(names, vec!["data", "learning", "network"]);
        assert!(words[0].1 > words[1].1);
        assert!(model.show_topic(5, 3).is_err());
    }

    #[test]
    fn test_topic_name_and_assign() {
        let model = model();
        assert_eq!(model.topic_name(1).unwrap(), "1_protein_cell_gene_data");
        let (topic, probability) = model.assign("gene gene cell").unwrap();
        assert_eq!(topic, 1);
        assert!(probability > 0.5);
    }

    #[test]
    fn test_invalid_shapes() {
        let file = LdaModelFile {
            num_topics: 2,
            alpha: Prior::Symmetric(0.5),
            lambda: vec![vec![1.0; 6]],
        };
        assert!(matches!(
            LdaModel::new(file, vocabulary()),
            Err(TopicsError::InvalidModel(_))
        ));

        let file = LdaModelFile {
            num_topics: 1,
            alpha: Prior::PerTopic(vec![0.1, 0.2]),
            lambda: vec![vec![1.0; 6]],
        };
        assert!(LdaModel::new(file, vocabulary()).is_err());

        let file = LdaModelFile {
            num_topics: 1,
            alpha: Prior::Symmetric(0.1),
            lambda: vec![vec![1.0; 5]],
        };
        assert!(LdaModel::new(file, vocabulary()).is_err());
    }

    #[test]
    fn test_load_from_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let model_path = dir.path().join("lda.json");
        let dict_path = dir.path().join("lda.id2word.json");
        std::fs::write(
            &model_path,
            r#"{"num_topics": 2, "alpha": [0.3, 0.7], "lambda": [[5.0, 1.0], [1.0, 5.0]]}"#,
        )
        .unwrap();
        std::fs::write(&dict_path, r#"["data", "gene"]"#).unwrap();

        let model = LdaModel::load(&model_path, &dict_path).unwrap();
        assert_eq!(model.num_topics(), 2);
        assert_eq!(model.kind(), ModelKind::Lda);
    }
}
