//! # bayesian-filter
//!
//! A multinomial Naive Bayes text classifier with Laplace smoothing.
//!
//! ## Features
//!
//! - Incremental training from token sequences or raw text
//! - Log-domain scoring with deterministic tie-breaking
//! - Top-K extraction as log-scores or normalized confidences
//! - Persistence as a pair of human-readable JSON files
//! - Configurable text analysis pipeline
//!
//! ## Example
//!
//! ```
//! use bayesian_filter::prelude::*;
//!
//! # fn main() -> bayesian_filter::error::Result<()> {
//! let mut filter = new_with_default_analyzer()?;
//! filter.fit("Win a FREE prize now!", "spam")?;
//! filter.fit("Are we still on for lunch?", "ham")?;
//!
//! let prediction = filter.predict("free prize")?;
//! assert_eq!(prediction.best_category, "spam");
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer, StandardAnalyzer};
    pub use crate::classifier::{
        BayesianFilter, NaiveBayesModel, Prediction, Score, TextClassifier, TrainingSample,
        new_bayesian_filter, new_with_default_analyzer,
    };
    pub use crate::config::FilterConfig;
    pub use crate::error::{BayesianFilterError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
