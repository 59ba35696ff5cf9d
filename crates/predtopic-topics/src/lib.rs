//! # predtopic-topics
//!
//! Pretrained topic models and everything rendered from them.
//!
//! ## Features
//! - LDA inference over a stored topic-word matrix, with per-word topics
//! - BERTopic assignment by similarity to stored topic word weights
//! - Topic color palettes and colored-text markup for predictions
//! - Precomputed corpus catalogs: best topic, representative documents
//! - Chart data and year-over-year trends per topic
//! - Immutable view state rendered into topic pages

pub mod bertopic;
pub mod catalog;
pub mod charts;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod formatter;
pub mod lda;
pub mod model;
pub mod palette;
pub mod similarity;
pub mod trends;
pub mod view;

pub use bertopic::{BertopicModel, BertopicModelFile, BertopicTopic};
pub use catalog::{
    load_descriptions, load_documents, CatalogEntry, RepresentativeDocument, TopicCatalog,
    TopicDescription,
};
pub use charts::{
    distribution_bar, top_words_chart, topic_over_time, word_cloud, BarChart, DistributionBar,
    TopicOverTime, WordCloud, YearCount,
};
pub use config::{InferenceConfig, PageConfig};
pub use dictionary::{TokenLookup, Vocabulary};
pub use error::TopicsError;
pub use formatter::{render_colored_text, render_headline, render_legend, Headline, Spacing};
pub use lda::{LdaModel, LdaModelFile, Prior};
pub use model::TopicModel;
pub use palette::{TopicColorMapper, LDA_PALETTE_LEN, PASTEL_PALETTE};
pub use similarity::sparse_cosine;
pub use trends::{analyze, GrowthRate, TopicTrend, TrendReport, SIGNIFICANT_CHANGE};
pub use view::{render_page, Dashboard, DashboardView, ModelPanel, PredictionSection, TopicPage};
