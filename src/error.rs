//! Error types for the bayesian-filter library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`BayesianFilterError`] enum.
//!
//! # Examples
//!
//! ```
//! use bayesian_filter::classifier::NaiveBayesModel;
//! use bayesian_filter::error::BayesianFilterError;
//!
//! let model = NaiveBayesModel::new();
//! match model.predict(&Vec::<String>::new()) {
//!     Err(BayesianFilterError::EmptyModel) => {}
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for bayesian-filter operations.
#[derive(Error, Debug)]
pub enum BayesianFilterError {
    /// A probability or score was requested for a category that was never trained.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The model has no trained categories at all.
    #[error("Empty model: no categories have been trained")]
    EmptyModel,

    /// One of the persisted model artifacts does not exist.
    #[error("Persisted state not found: {}", .0.display())]
    PersistenceNotFound(PathBuf),

    /// The persisted records do not have the expected shape or disagree with each other.
    #[error("Malformed persisted state: {0}")]
    MalformedPersistedState(String),

    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid argument or configuration value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with BayesianFilterError.
pub type Result<T> = std::result::Result<T, BayesianFilterError>;

impl BayesianFilterError {
    /// Create a new unknown category error.
    pub fn unknown_category<S: Into<String>>(category: S) -> Self {
        BayesianFilterError::UnknownCategory(category.into())
    }

    /// Create a new persistence-not-found error.
    pub fn persistence_not_found<P: Into<PathBuf>>(path: P) -> Self {
        BayesianFilterError::PersistenceNotFound(path.into())
    }

    /// Create a new malformed persisted state error.
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        BayesianFilterError::MalformedPersistedState(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        BayesianFilterError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        BayesianFilterError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        BayesianFilterError::Other(msg.into())
    }
}
