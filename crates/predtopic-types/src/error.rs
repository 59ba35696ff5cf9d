//! Error types shared across the PREDTopic crates.

use thiserror::Error;

/// Unified error type for configuration and domain validation.
#[derive(Debug, Error)]
pub enum TypesError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown model kind
    #[error("Unknown model kind: {0}")]
    UnknownModel(String),

    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
