//! Configuration loading for PREDTopic.
//!
//! Layered config: defaults -> config file -> env vars -> CLI flags.
//! The default config file lives at ~/.config/predtopic/config.toml.

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::TypesError;
use crate::topic::ModelKind;

/// Upper bound accepted for `max_input_chars`.
pub const MAX_INPUT_CHARS_LIMIT: usize = 3000;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding prepared_data.csv and the topic assignment tables
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Serialized LDA model
    #[serde(default = "default_lda_model_path")]
    pub lda_model_path: String,

    /// Vocabulary dictionary of the LDA model
    #[serde(default = "default_lda_dictionary_path")]
    pub lda_dictionary_path: String,

    /// Serialized BERTopic topic representations
    #[serde(default = "default_bertopic_model_path")]
    pub bertopic_model_path: String,

    /// Directory holding the topic description tables
    #[serde(default = "default_materials_dir")]
    pub materials_dir: String,

    /// Maximum accepted length of a submitted research idea, in characters
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Model selected when nothing else is requested
    #[serde(default)]
    pub default_model: ModelKind,

    /// Number of representative documents shown per topic
    #[serde(default = "default_representative_docs")]
    pub representative_docs: usize,

    /// Seed for sampling representative documents
    #[serde(default = "default_sample_seed")]
    pub sample_seed: u64,

    /// Words in the top-words bar chart
    #[serde(default = "default_top_words")]
    pub top_words: usize,

    /// Words in the word cloud
    #[serde(default = "default_wordcloud_words")]
    pub wordcloud_words: usize,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_lda_model_path() -> String {
    "models/lda_model/best_lda_model.json".to_string()
}

fn default_lda_dictionary_path() -> String {
    "models/lda_model/best_lda_model.id2word.json".to_string()
}

fn default_bertopic_model_path() -> String {
    "models/bertopic_model/topics.json".to_string()
}

fn default_materials_dir() -> String {
    "materials/documentation".to_string()
}

fn default_max_input_chars() -> usize {
    MAX_INPUT_CHARS_LIMIT
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

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            lda_model_path: default_lda_model_path(),
            lda_dictionary_path: default_lda_dictionary_path(),
            bertopic_model_path: default_bertopic_model_path(),
            materials_dir: default_materials_dir(),
            max_input_chars: default_max_input_chars(),
            default_model: ModelKind::default(),
            representative_docs: default_representative_docs(),
            sample_seed: default_sample_seed(),
            top_words: default_top_words(),
            wordcloud_words: default_wordcloud_words(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/predtopic/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (PREDTOPIC_*)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, TypesError> {
        let config_dir = ProjectDirs::from("", "", "predtopic")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("data_dir", default_data_dir())
            .map_err(|e| TypesError::Config(e.to_string()))?
            .set_default("lda_model_path", default_lda_model_path())
            .map_err(|e| TypesError::Config(e.to_string()))?
            .set_default("lda_dictionary_path", default_lda_dictionary_path())
            .map_err(|e| TypesError::Config(e.to_string()))?
            .set_default("bertopic_model_path", default_bertopic_model_path())
            .map_err(|e| TypesError::Config(e.to_string()))?
            .set_default("materials_dir", default_materials_dir())
            .map_err(|e| TypesError::Config(e.to_string()))?
            .set_default("max_input_chars", default_max_input_chars() as i64)
            .map_err(|e| TypesError::Config(e.to_string()))?
            .set_default("log_level", default_log_level())
            .map_err(|e| TypesError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // PREDTOPIC_DATA_DIR, PREDTOPIC_MAX_INPUT_CHARS, ...
        builder = builder.add_source(
            Environment::with_prefix("PREDTOPIC")
                .prefix_separator("_")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| TypesError::Config(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| TypesError::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), TypesError> {
        if self.max_input_chars == 0 || self.max_input_chars > MAX_INPUT_CHARS_LIMIT {
            return Err(TypesError::Config(format!(
                "max_input_chars must be 1-{}, got {}",
                MAX_INPUT_CHARS_LIMIT, self.max_input_chars
            )));
        }
        if self.top_words == 0 {
            return Err(TypesError::Config("top_words must be > 0".to_string()));
        }
        if self.wordcloud_words == 0 {
            return Err(TypesError::Config(
                "wordcloud_words must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Check a submitted text against the input length limit.
    pub fn check_input(&self, text: &str) -> Result<(), TypesError> {
        if text.trim().is_empty() {
            return Err(TypesError::InvalidInput("text is empty".to_string()));
        }
        let chars = text.chars().count();
        if chars > self.max_input_chars {
            return Err(TypesError::InvalidInput(format!(
                "text has {} characters, limit is {}",
                chars, self.max_input_chars
            )));
        }
        Ok(())
    }

    /// Resolve all relative paths against a base directory.
    pub fn rooted_at(mut self, base: &Path) -> Self {
        let join = |p: &str| -> String {
            let path = Path::new(p);
            if path.is_absolute() {
                p.to_string()
            } else {
                base.join(path).to_string_lossy().to_string()
            }
        };
        self.data_dir = join(&self.data_dir);
        self.lda_model_path = join(&self.lda_model_path);
        self.lda_dictionary_path = join(&self.lda_dictionary_path);
        self.bertopic_model_path = join(&self.bertopic_model_path);
        self.materials_dir = join(&self.materials_dir);
        self
    }

    pub fn prepared_data_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join("prepared_data.csv")
    }

    /// Precomputed assignment table for a model.
    pub fn assignments_path(&self, model: ModelKind) -> PathBuf {
        let file = match model {
            ModelKind::Lda => "topic_probabilities_LDA-BoW.csv",
            ModelKind::Bertopic => "topic_documents_BERTopic.csv",
        };
        Path::new(&self.data_dir).join(file)
    }

    /// Topic description table for a model.
    pub fn descriptions_path(&self, model: ModelKind) -> PathBuf {
        let file = match model {
            ModelKind::Lda => "topic_descriptions_LDA.csv",
            ModelKind::Bertopic => "topic_descriptions_BERTopic.csv",
        };
        Path::new(&self.materials_dir).join(file)
    }
}
