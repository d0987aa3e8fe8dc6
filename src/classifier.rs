//! Multinomial Naive Bayes text classification.
//!
//! The classifier keeps three tables:
//!
//! - **word counts**: category → word → occurrences
//! - **category counts**: category → number of training documents
//! - **vocabulary**: every distinct word seen under any category
//!
//! Training only ever adds to the counts. Scoring uses Laplace (add-one)
//! smoothed word likelihoods accumulated as natural logarithms:
//!
//! ```text
//! score(tokens, c) = ln P(c) + Σ ln ((count(w, c) + 1) / (Σ count(·, c) + |V|))
//! ```
//!
//! # Architecture
//!
//! - [`NaiveBayesModel`]: the owned aggregate of the three tables, with the
//!   counter, estimator, predictor and top-K extraction as methods
//! - [`BayesianFilter`]: a model paired with an [`Analyzer`](crate::analysis::analyzer::Analyzer)
//!   so raw text can be trained on and classified
//! - [`TextClassifier`]: the text-level interface `BayesianFilter` implements
//! - persistence: `<base>_word.json` and `<base>_category.json`
//!
//! # Example
//!
//! ```
//! use bayesian_filter::classifier::NaiveBayesModel;
//!
//! # fn main() -> bayesian_filter::error::Result<()> {
//! let mut model = NaiveBayesModel::new();
//! model.fit(&["cat", "pet"], "animal");
//! model.fit(&["car", "road"], "vehicle");
//!
//! let prediction = model.predict(&["cat"])?;
//! assert_eq!(prediction.best_category, "animal");
//!
//! let confidence = model.top_k(&prediction.scores, 3, false, prediction.token_count);
//! assert_eq!(confidence.keys().next().map(String::as_str), Some("animal"));
//! # Ok(())
//! # }
//! ```

mod bayesian;
mod core;
mod estimator;
mod model;
mod persistence;
mod predictor;
mod text_classifier;
mod top_k;
mod types;

pub use self::bayesian::BayesianFilter;
pub use self::core::{load_training_data, new_bayesian_filter, new_with_default_analyzer};
pub use self::model::NaiveBayesModel;
pub use self::persistence::{ModelPaths, load_model, save_model};
pub use self::text_classifier::TextClassifier;
pub use self::top_k::top_k_scores;
pub use self::types::{
    CategoryCounts, CategoryStats, ModelStats, Prediction, Score, TrainingSample, WordCounts,
};
