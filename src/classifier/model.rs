//! The owned model aggregate and the training counter.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::debug;

use super::types::{CategoryCounts, CategoryStats, ModelStats, WordCounts};
use crate::error::{BayesianFilterError, Result};

/// Word counts, category counts and vocabulary of a Naive Bayes classifier.
///
/// Categories are kept in first-seen order. That order is the iteration order
/// of [`predict`](NaiveBayesModel::predict) and therefore decides ties.
///
/// The model performs unsynchronized read-modify-write updates in
/// [`fit`](NaiveBayesModel::fit); share it across threads only behind a lock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NaiveBayesModel {
    pub(super) word_counts: WordCounts,
    pub(super) category_counts: CategoryCounts,
    pub(super) vocabulary: HashSet<String>,
}

impl NaiveBayesModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from persisted tables, rebuilding the vocabulary.
    ///
    /// The category keys of both tables must match exactly and every document
    /// count must be positive, as [`fit`](Self::fit) would have left them. Tables
    /// whose totals overflow a `u64` are rejected. The word tables are reordered
    /// to follow `category_counts`.
    pub fn from_tables(
        mut word_counts: WordCounts,
        category_counts: CategoryCounts,
    ) -> Result<Self> {
        if word_counts.len() != category_counts.len()
            || category_counts
                .keys()
                .any(|category| !word_counts.contains_key(category))
        {
            let only_words: Vec<&str> = word_counts
                .keys()
                .filter(|c| !category_counts.contains_key(*c))
                .map(String::as_str)
                .collect();
            let only_categories: Vec<&str> = category_counts
                .keys()
                .filter(|c| !word_counts.contains_key(*c))
                .map(String::as_str)
                .collect();
            return Err(BayesianFilterError::malformed(format!(
                "category keys diverge (only in word record: {only_words:?}, only in category record: {only_categories:?})"
            )));
        }

        let mut ordered = IndexMap::with_capacity(category_counts.len());
        for category in category_counts.keys() {
            if let Some(words) = word_counts.swap_remove(category) {
                ordered.insert(category.clone(), words);
            }
        }

        if let Some((category, _)) = category_counts.iter().find(|(_, count)| **count == 0) {
            return Err(BayesianFilterError::malformed(format!(
                "category '{category}' has a document count of 0"
            )));
        }
        category_counts
            .values()
            .try_fold(0u64, |total, &count| total.checked_add(count))
            .ok_or_else(|| BayesianFilterError::malformed("total document count overflows"))?;

        let vocabulary: HashSet<String> = ordered
            .values()
            .flat_map(|words| words.keys().cloned())
            .collect();

        // Smoothing denominators are Σ count(·, c) + |V|; they must fit in a u64.
        let vocabulary_size = vocabulary.len() as u64;
        for (category, words) in &ordered {
            words
                .values()
                .try_fold(vocabulary_size, |total, &count| total.checked_add(count))
                .ok_or_else(|| {
                    BayesianFilterError::malformed(format!(
                        "word counts of category '{category}' overflow"
                    ))
                })?;
        }

        Ok(Self {
            word_counts: ordered,
            category_counts,
            vocabulary,
        })
    }

    /// Count one training document.
    ///
    /// Every token increments its count under `category` and joins the
    /// vocabulary; the category's document count goes up by exactly one, even
    /// when `tokens` is empty.
    pub fn fit<S: AsRef<str>>(&mut self, tokens: &[S], category: &str) {
        let words = self.word_counts.entry(category.to_string()).or_default();
        for token in tokens {
            let token = token.as_ref();
            *words.entry(token.to_string()).or_insert(0) += 1;
            if !self.vocabulary.contains(token) {
                self.vocabulary.insert(token.to_string());
            }
        }
        *self.category_counts.entry(category.to_string()).or_insert(0) += 1;

        debug!(
            "fit {} tokens into category '{}' (vocabulary size {})",
            tokens.len(),
            category,
            self.vocabulary.len()
        );
    }

    /// Count many training documents.
    pub fn fit_all<I, T, S>(&mut self, documents: I)
    where
        I: IntoIterator<Item = (T, S)>,
        T: AsRef<[String]>,
        S: AsRef<str>,
    {
        for (tokens, category) in documents {
            self.fit(tokens.as_ref(), category.as_ref());
        }
    }

    /// Categories in first-seen order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.category_counts.keys().map(String::as_str)
    }

    /// Number of training documents seen for a category.
    pub fn category_count(&self, category: &str) -> Option<u64> {
        self.category_counts.get(category).copied()
    }

    /// Occurrences of `word` under `category` (0 when never seen there).
    pub fn word_count(&self, word: &str, category: &str) -> Result<u64> {
        let words = self
            .word_counts
            .get(category)
            .ok_or_else(|| BayesianFilterError::unknown_category(category))?;
        Ok(words.get(word).copied().unwrap_or(0))
    }

    /// Total word occurrences counted under `category`.
    pub fn total_word_count(&self, category: &str) -> Result<u64> {
        let words = self
            .word_counts
            .get(category)
            .ok_or_else(|| BayesianFilterError::unknown_category(category))?;
        Ok(words.values().sum())
    }

    /// Every distinct word seen under any category.
    pub fn vocabulary(&self) -> &HashSet<String> {
        &self.vocabulary
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Total number of training documents across all categories.
    pub fn document_count(&self) -> u64 {
        self.category_counts.values().sum()
    }

    pub fn word_counts(&self) -> &WordCounts {
        &self.word_counts
    }

    pub fn category_counts(&self) -> &CategoryCounts {
        &self.category_counts
    }

    /// Whether no category has been trained yet.
    pub fn is_empty(&self) -> bool {
        self.category_counts.is_empty()
    }

    pub fn stats(&self) -> ModelStats {
        let categories = self
            .category_counts
            .iter()
            .map(|(category, &documents)| {
                let words = self.word_counts.get(category);
                CategoryStats {
                    category: category.clone(),
                    documents,
                    words: words.map(|w| w.values().sum()).unwrap_or(0),
                    distinct_words: words.map(IndexMap::len).unwrap_or(0),
                }
            })
            .collect();

        ModelStats {
            documents: self.document_count(),
            vocabulary_size: self.vocabulary_size(),
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_counts_words_and_documents() {
        let mut model = NaiveBayesModel::new();
        model.fit(&["a", "a", "b"], "X");

        assert_eq!(model.word_count("a", "X").unwrap(), 2);
        assert_eq!(model.word_count("b", "X").unwrap(), 1);
        assert_eq!(model.word_count("c", "X").unwrap(), 0);
        assert_eq!(model.total_word_count("X").unwrap(), 3);
        assert_eq!(model.category_count("X"), Some(1));
        assert_eq!(model.vocabulary_size(), 2);
    }

    #[test]
    fn test_fit_empty_tokens_still_counts_document() {
        let mut model = NaiveBayesModel::new();
        model.fit::<&str>(&[], "x");

        assert_eq!(model.category_count("x"), Some(1));
        assert_eq!(model.total_word_count("x").unwrap(), 0);
        assert!(model.word_counts().contains_key("x"));
        assert_eq!(model.vocabulary_size(), 0);
    }

    #[test]
    fn test_counts_are_cumulative() {
        let mut model = NaiveBayesModel::new();
        model.fit(&["a"], "X");
        let before = model.word_count("a", "X").unwrap();

        model.fit(&["a", "b"], "X");
        model.fit(&["c"], "Y");

        assert!(model.word_count("a", "X").unwrap() > before);
        assert_eq!(model.category_count("X"), Some(2));
        assert_eq!(model.document_count(), 3);
        assert_eq!(model.vocabulary_size(), 3);
    }

    #[test]
    fn test_category_order_is_first_seen() {
        let mut model = NaiveBayesModel::new();
        model.fit(&["x"], "zeta");
        model.fit(&["y"], "alpha");
        model.fit(&["z"], "zeta");

        let categories: Vec<&str> = model.categories().collect();
        assert_eq!(categories, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_fit_all() {
        let mut model = NaiveBayesModel::new();
        model.fit_all(vec![
            (vec!["cat".to_string()], "animal"),
            (vec!["car".to_string()], "vehicle"),
        ]);
        assert_eq!(model.document_count(), 2);
    }

    #[test]
    fn test_unknown_category_word_count() {
        let model = NaiveBayesModel::new();
        assert!(matches!(
            model.word_count("a", "missing"),
            Err(BayesianFilterError::UnknownCategory(c)) if c == "missing"
        ));
    }

    #[test]
    fn test_from_tables_rebuilds_vocabulary() {
        let mut word_counts = WordCounts::new();
        word_counts.insert(
            "b".to_string(),
            IndexMap::from([("x".to_string(), 1), ("y".to_string(), 2)]),
        );
        word_counts.insert("a".to_string(), IndexMap::from([("y".to_string(), 4)]));
        let category_counts = CategoryCounts::from([("a".to_string(), 1), ("b".to_string(), 2)]);

        let model = NaiveBayesModel::from_tables(word_counts, category_counts).unwrap();

        assert_eq!(model.vocabulary_size(), 2);
        assert!(model.vocabulary().contains("x"));
        let word_order: Vec<&String> = model.word_counts().keys().collect();
        assert_eq!(word_order, vec!["a", "b"]);
    }

    #[test]
    fn test_from_tables_rejects_divergent_keys() {
        let mut word_counts = WordCounts::new();
        word_counts.insert("a".to_string(), IndexMap::new());
        let category_counts = CategoryCounts::from([("b".to_string(), 1)]);

        let result = NaiveBayesModel::from_tables(word_counts, category_counts);
        assert!(matches!(
            result,
            Err(BayesianFilterError::MalformedPersistedState(_))
        ));
    }

    #[test]
    fn test_from_tables_rejects_zero_document_count() {
        let mut word_counts = WordCounts::new();
        word_counts.insert("a".to_string(), IndexMap::from([("x".to_string(), 1)]));
        word_counts.insert("b".to_string(), IndexMap::from([("y".to_string(), 1)]));
        let category_counts = CategoryCounts::from([("a".to_string(), 0), ("b".to_string(), 1)]);

        let result = NaiveBayesModel::from_tables(word_counts, category_counts);
        assert!(matches!(
            result,
            Err(BayesianFilterError::MalformedPersistedState(msg)) if msg.contains("'a'")
        ));
    }

    #[test]
    fn test_from_tables_rejects_overflowing_word_counts() {
        let mut word_counts = WordCounts::new();
        word_counts.insert(
            "a".to_string(),
            IndexMap::from([("x".to_string(), u64::MAX)]),
        );
        let category_counts = CategoryCounts::from([("a".to_string(), 1)]);

        let result = NaiveBayesModel::from_tables(word_counts, category_counts);
        assert!(matches!(
            result,
            Err(BayesianFilterError::MalformedPersistedState(_))
        ));
    }

    #[test]
    fn test_from_tables_rejects_overflowing_document_total() {
        let mut word_counts = WordCounts::new();
        word_counts.insert("a".to_string(), IndexMap::new());
        word_counts.insert("b".to_string(), IndexMap::new());
        let category_counts =
            CategoryCounts::from([("a".to_string(), u64::MAX), ("b".to_string(), 1)]);

        let result = NaiveBayesModel::from_tables(word_counts, category_counts);
        assert!(matches!(
            result,
            Err(BayesianFilterError::MalformedPersistedState(_))
        ));
    }

    #[test]
    fn test_from_tables_accepts_largest_safe_counts() {
        let mut word_counts = WordCounts::new();
        word_counts.insert(
            "a".to_string(),
            IndexMap::from([("x".to_string(), u64::MAX - 1)]),
        );
        let category_counts = CategoryCounts::from([("a".to_string(), 1)]);

        let model = NaiveBayesModel::from_tables(word_counts, category_counts).unwrap();
        assert_eq!(model.word_likelihood("x", "a").unwrap(), 1.0);
        assert!(model.score(&["x", "unseen"], "a").unwrap().is_finite());
    }

    #[test]
    fn test_stats() {
        let mut model = NaiveBayesModel::new();
        model.fit(&["a", "a", "b"], "X");
        model.fit(&["c"], "Y");
        model.fit(&["c"], "Y");

        let stats = model.stats();
        assert_eq!(stats.documents, 3);
        assert_eq!(stats.vocabulary_size, 3);
        assert_eq!(stats.categories[0].category, "X");
        assert_eq!(stats.categories[0].words, 3);
        assert_eq!(stats.categories[0].distinct_words, 2);
        assert_eq!(stats.categories[1].documents, 2);
    }
}
