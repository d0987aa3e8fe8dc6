//! Top-K extraction of category scores.

use indexmap::IndexMap;

use super::model::NaiveBayesModel;
use super::types::Score;

impl NaiveBayesModel {
    /// Keep the `k` highest-scoring categories, in descending score order.
    ///
    /// With `as_log` the raw log-scores are returned. Otherwise each score `s`
    /// becomes `(exp(s) * |V|) ^ (1 / (token_count + 1))` and the `k` values
    /// are normalized to sum to 1. See [`top_k_scores`].
    pub fn top_k(
        &self,
        scores: &[Score],
        k: usize,
        as_log: bool,
        token_count: usize,
    ) -> IndexMap<String, f64> {
        top_k_scores(scores, k, as_log, token_count, self.vocabulary_size())
    }
}

/// Top-K extraction against an explicit vocabulary size.
///
/// The sort is stable: equal scores keep their order from `scores`. A category
/// listed twice keeps its first position and its last value.
///
/// The confidence values are a heuristic rescaling of the log-scores, not a
/// posterior. They are computed in the log domain,
/// `(s + ln |V|) / (token_count + 1)`, and normalized with the maximum
/// subtracted, which is the same quantity without underflowing `exp(s)` for
/// long inputs.
pub fn top_k_scores(
    scores: &[Score],
    k: usize,
    as_log: bool,
    token_count: usize,
    vocabulary_size: usize,
) -> IndexMap<String, f64> {
    let mut by_category: IndexMap<&str, f64> = IndexMap::with_capacity(scores.len());
    for score in scores {
        by_category.insert(score.category.as_str(), score.value);
    }

    let mut sorted: Vec<(&str, f64)> = by_category.into_iter().collect();
    sorted.sort_by(|a, b| b.1.total_cmp(&a.1));
    sorted.truncate(k);

    if as_log {
        return sorted
            .into_iter()
            .map(|(category, value)| (category.to_string(), value))
            .collect();
    }

    if sorted.is_empty() {
        return IndexMap::new();
    }

    // ln |V| shifts every value equally; an empty vocabulary contributes nothing.
    let ln_vocabulary = if vocabulary_size > 0 {
        (vocabulary_size as f64).ln()
    } else {
        0.0
    };
    let rate = 1.0 / (token_count as f64 + 1.0);

    let log_values: Vec<f64> = sorted
        .iter()
        .map(|(_, score)| (score + ln_vocabulary) * rate)
        .collect();
    let max = log_values
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let values: Vec<f64> = log_values.iter().map(|v| (v - max).exp()).collect();
    let total: f64 = values.iter().sum();

    sorted
        .into_iter()
        .zip(values)
        .map(|((category, _), value)| (category.to_string(), value / total))
        .collect()
}
