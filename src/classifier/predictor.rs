//! Arg-max prediction over all trained categories.

use log::debug;

use super::model::NaiveBayesModel;
use super::types::{Prediction, Score};
use crate::error::{BayesianFilterError, Result};

impl NaiveBayesModel {
    /// Score `tokens` against every trained category and pick the best one.
    ///
    /// Categories are evaluated in first-seen order and a later category only
    /// wins with a strictly greater score, so ties resolve to the category that
    /// was trained first.
    pub fn predict<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Prediction> {
        if self.category_counts.is_empty() {
            return Err(BayesianFilterError::EmptyModel);
        }

        let mut scores = Vec::with_capacity(self.category_counts.len());
        let mut best: Option<(usize, f64)> = None;

        for (idx, category) in self.category_counts.keys().enumerate() {
            let value = self.score(tokens, category)?;
            if best.is_none_or(|(_, max)| value > max) {
                best = Some((idx, value));
            }
            scores.push(Score::new(category.clone(), value));
        }

        let best_category = match best {
            Some((idx, _)) => scores[idx].category.clone(),
            None => return Err(BayesianFilterError::EmptyModel),
        };

        debug!(
            "predicted '{}' for {} tokens over {} categories",
            best_category,
            tokens.len(),
            scores.len()
        );

        Ok(Prediction {
            best_category,
            scores,
            token_count: tokens.len(),
        })
    }
}
