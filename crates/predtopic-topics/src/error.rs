//! Topic error types.

use thiserror::Error;

/// Errors that can occur while loading models or tables and running inference.
#[derive(Debug, Error)]
pub enum TopicsError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Model file is structurally invalid
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// Topic or document not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from shared types
    #[error(transparent)]
    Types(#[from] predtopic_types::TypesError),
}
