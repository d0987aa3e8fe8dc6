//! Common types for the Naive Bayes classifier.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// category → word → occurrence count, in first-seen category order.
pub type WordCounts = IndexMap<String, IndexMap<String, u64>>;

/// category → number of training documents, in first-seen category order.
pub type CategoryCounts = IndexMap<String, u64>;

/// Training sample: a raw text and the category it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSample {
    /// Text to tokenize and count.
    pub text: String,
    /// Category label.
    pub category: String,
}

impl TrainingSample {
    pub fn new<T: Into<String>, C: Into<String>>(text: T, category: C) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }
}

/// Log-probability score of one category for one token sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub category: String,
    /// ln P(category) + Σ ln P(token | category)
    pub value: f64,
}

impl Score {
    pub fn new<S: Into<String>>(category: S, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}

/// Result of [`NaiveBayesModel::predict`](super::NaiveBayesModel::predict).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Category with the greatest score; ties go to the earliest-trained category.
    pub best_category: String,
    /// One score per trained category, in category order.
    pub scores: Vec<Score>,
    /// Length of the scored token sequence.
    pub token_count: usize,
}

impl Prediction {
    /// Score of the winning category.
    pub fn best_score(&self) -> Option<f64> {
        self.scores
            .iter()
            .find(|score| score.category == self.best_category)
            .map(|score| score.value)
    }

    /// Top-K summary of this prediction, forwarding its token count.
    pub fn top_k(
        &self,
        model: &super::NaiveBayesModel,
        k: usize,
        as_log: bool,
    ) -> IndexMap<String, f64> {
        model.top_k(&self.scores, k, as_log, self.token_count)
    }
}

/// Per-category training summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: String,
    /// Number of training documents.
    pub documents: u64,
    /// Total word occurrences counted under the category.
    pub words: u64,
    /// Distinct words seen under the category.
    pub distinct_words: usize,
}

/// Summary of a model's tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelStats {
    pub documents: u64,
    pub vocabulary_size: usize,
    pub categories: Vec<CategoryStats>,
}
