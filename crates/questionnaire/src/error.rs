//! Error types for the questionnaire library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for questionnaire operations.
#[derive(Debug, Error)]
pub enum QuestionnaireError {
    /// A required column is absent or holds values of the wrong type.
    #[error("Schema error in column '{column}': {message}")]
    Schema { column: String, message: String },

    /// A parameter is outside its accepted domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A per-row value does not have the type the operation requires.
    #[error("Invalid input at row {row}, column '{column}': {message}")]
    InvalidInput {
        row: usize,
        column: String,
        message: String,
    },

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Empty file or no data to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An analysis step was requested before the data was read.
    #[error("No data loaded; call read_data() first")]
    NotLoaded,
}

impl QuestionnaireError {
    /// Shorthand for a schema error on a named column.
    pub fn schema(column: impl Into<String>, message: impl Into<String>) -> Self {
        QuestionnaireError::Schema {
            column: column.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for questionnaire operations.
pub type Result<T> = std::result::Result<T, QuestionnaireError>;
