//! Error types for wikisum.
//!
//! This module defines the error types returned by summarization operations.

/// Error type for summarization operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Raw article text could not be fetched for the requested title.
    #[error("Article fetch failed: {0}")]
    FetchError(String),

    /// The serialized model bundle could not be read or deserialized.
    #[error("Model load failed: {0}")]
    ModelError(String),

    /// Feature rows do not match the schema the model was trained against.
    #[error("Feature schema mismatch: {0}")]
    SchemaError(String),

    /// The predictor returned decisions misaligned with its input rows.
    #[error("Prediction failed: {0}")]
    PredictionError(String),
}

/// Result type alias for summarization operations.
pub type Result<T> = std::result::Result<T, Error>;
