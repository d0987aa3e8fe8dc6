//! Probability estimates: category priors, smoothed word likelihoods and
//! log-scores.

use super::model::NaiveBayesModel;
use crate::error::{BayesianFilterError, Result};

impl NaiveBayesModel {
    /// P(category): the category's share of all training documents.
    pub fn category_prior(&self, category: &str) -> Result<f64> {
        let total = self.document_count();
        if self.category_counts.is_empty() || total == 0 {
            return Err(BayesianFilterError::EmptyModel);
        }
        let count = self
            .category_counts
            .get(category)
            .ok_or_else(|| BayesianFilterError::unknown_category(category))?;

        Ok(*count as f64 / total as f64)
    }

    /// P(word | category) with Laplace smoothing:
    /// `(count(word, category) + 1) / (Σ count(·, category) + |V|)`.
    ///
    /// Strictly positive for every word, seen or not.
    pub fn word_likelihood(&self, word: &str, category: &str) -> Result<f64> {
        let words = self
            .word_counts
            .get(category)
            .ok_or_else(|| BayesianFilterError::unknown_category(category))?;
        let denominator = words.values().sum::<u64>() + self.vocabulary.len() as u64;
        let count = words.get(word).copied().unwrap_or(0);

        Ok(Self::smoothed(count, denominator))
    }

    /// Log-score of a token sequence for one category:
    /// `ln P(category) + Σ ln P(token | category)`.
    pub fn score<S: AsRef<str>>(&self, tokens: &[S], category: &str) -> Result<f64> {
        let mut score = self.category_prior(category)?.ln();

        let words = self
            .word_counts
            .get(category)
            .ok_or_else(|| BayesianFilterError::unknown_category(category))?;
        let denominator = words.values().sum::<u64>() + self.vocabulary.len() as u64;

        for token in tokens {
            let count = words.get(token.as_ref()).copied().unwrap_or(0);
            score += Self::smoothed(count, denominator).ln();
        }

        Ok(score)
    }

    fn smoothed(count: u64, denominator: u64) -> f64 {
        // A category trained only on empty documents in an empty vocabulary has
        // no evidence for any word.
        if denominator == 0 {
            return 1.0;
        }
        (count + 1) as f64 / denominator as f64
    }
}
