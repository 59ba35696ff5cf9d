//! # predtopic-types
//!
//! Shared domain types for PREDTopic.
//!
//! - Documents: research article metadata, immutable once loaded
//! - Tokens: normalized word units produced by the text pipeline
//! - Topics: topic ids, assignments, distributions and predictions
//! - Settings: layered configuration

pub mod config;
pub mod document;
pub mod error;
pub mod token;
pub mod topic;

pub use config::{Settings, MAX_INPUT_CHARS_LIMIT};
pub use document::Document;
pub use error::TypesError;
pub use token::{PartOfSpeech, Token};
pub use topic::{
    parse_topic_label, topic_label, ModelKind, PerWordTopics, Prediction, TokenId, Topic,
    TopicAssignment, TopicDistribution, TopicId, WordTopics,
};
