//! Inference configuration.

use serde::{Deserialize, Serialize};

/// Variational inference settings for the LDA model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Maximum E-step iterations per document
    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// Stop when mean absolute change in gamma falls below this
    #[serde(default = "default_gamma_threshold")]
    pub gamma_threshold: f64,

    /// Topics below this probability are dropped from the distribution
    #[serde(default = "default_minimum_probability")]
    pub minimum_probability: f64,

    /// Per-word topics below this relevance are dropped
    #[serde(default = "default_minimum_phi_value")]
    pub minimum_phi_value: f64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            gamma_threshold: default_gamma_threshold(),
            minimum_probability: default_minimum_probability(),
            minimum_phi_value: default_minimum_phi_value(),
        }
    }
}

fn default_iterations() -> usize {
    50
}

fn default_gamma_threshold() -> f64 {
    0.001
}

fn default_minimum_probability() -> f64 {
    0.01
}

fn default_minimum_phi_value() -> f64 {
    0.01
}

/// Rendering settings for topic pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Documents listed per topic
    #[serde(default = "default_representative_docs")]
    pub representative_docs: usize,

    /// Seed for sampling representative documents
    #[serde(default = "default_sample_seed")]
    pub sample_seed: u64,

    /// Words in the top-words chart
    #[serde(default = "default_top_words")]
    pub top_words: usize,

    /// Words in the word cloud
    #[serde(default = "default_wordcloud_words")]
    pub wordcloud_words: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            representative_docs: default_representative_docs(),
            sample_seed: default_sample_seed(),
            top_words: default_top_words(),
            wordcloud_words: default_wordcloud_words(),
        }
    }
}

impl From<&predtopic_types::Settings> for PageConfig {
    fn from(settings: &predtopic_types::Settings) -> Self {
        Self {
            representative_docs: settings.representative_docs,
            sample_seed: settings.sample_seed,
            top_words: settings.top_words,
            wordcloud_words: settings.wordcloud_words,
        }
    }
}

fn default_representative_docs() -> usize {
    10
}

fn default_sample_seed() -> u64 {
    42
}

fn default_top_words() -> usize {
    10
}

fn default_wordcloud_words() -> usize {
    50
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inference_defaults() {
        let config = InferenceConfig::default();
        assert_eq!(config.iterations, 50);
        assert!((config.gamma_threshold - 0.001).abs() < f64::EPSILON);
        assert!((config.minimum_probability - 0.01).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_deserialize() {
        let config: InferenceConfig = serde_json::from_str(r#"{"iterations": 100}"#).unwrap();
        assert_eq!(config.iterations, 100);
        assert!((config.minimum_phi_value - 0.01).abs() < f64::EPSILON);
    }

    #[test]
    fn test_page_config_from_settings() {
        let mut settings = predtopic_types::Settings::default();
        settings.representative_docs = 5;
        let config = PageConfig::from(&settings);
        assert_eq!(config.representative_docs, 5);
        assert_eq!(config.wordcloud_words, 50);
    }
}
