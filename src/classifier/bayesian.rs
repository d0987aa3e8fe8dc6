//! Naive Bayes classifier over analyzed text.

use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;
use log::debug;

use super::model::NaiveBayesModel;
use super::persistence::ModelPaths;
use super::text_classifier::TextClassifier;
use super::types::{Prediction, TrainingSample};
use crate::analysis::analyzer::Analyzer;
use crate::error::Result;

/// A [`NaiveBayesModel`] paired with the analyzer that turns text into tokens.
///
/// The same analyzer must be used for training and prediction; the model only
/// stores the tokens it produced.
pub struct BayesianFilter {
    model: NaiveBayesModel,
    analyzer: Arc<dyn Analyzer>,
}

impl BayesianFilter {
    /// Create an untrained filter.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self::from_model(NaiveBayesModel::new(), analyzer)
    }

    /// Wrap an existing model.
    pub fn from_model(model: NaiveBayesModel, analyzer: Arc<dyn Analyzer>) -> Self {
        Self { model, analyzer }
    }

    /// Load the model stored under `base`.
    pub fn from_path<P: AsRef<Path>>(base: P, analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        Ok(Self::from_model(NaiveBayesModel::from_path(base)?, analyzer))
    }

    /// Analyze `text` and count it under `category`.
    pub fn fit(&mut self, text: &str, category: &str) -> Result<()> {
        let tokens = self.analyzer.tokens(text)?;
        self.model.fit(&tokens, category);
        Ok(())
    }

    /// Train on every sample, stopping at the first analysis error.
    pub fn fit_samples(&mut self, samples: &[TrainingSample]) -> Result<()> {
        for sample in samples {
            self.fit(&sample.text, &sample.category)?;
        }
        debug!("trained on {} samples", samples.len());
        Ok(())
    }

    /// Analyze `text` and pick the most likely category.
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        let tokens = self.analyzer.tokens(text)?;
        self.model.predict(&tokens)
    }

    /// Classify `text` and return its `k` best categories.
    pub fn top_k(&self, text: &str, k: usize, as_log: bool) -> Result<IndexMap<String, f64>> {
        let prediction = self.predict(text)?;
        Ok(prediction.top_k(&self.model, k, as_log))
    }

    pub fn save<P: AsRef<Path>>(&self, base: P) -> Result<ModelPaths> {
        self.model.save(base)
    }

    /// Replace the model with the one stored under `base`, keeping the
    /// current one on error.
    pub fn load<P: AsRef<Path>>(&mut self, base: P) -> Result<()> {
        self.model.load(base)
    }

    pub fn model(&self) -> &NaiveBayesModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut NaiveBayesModel {
        &mut self.model
    }

    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }
}

impl TextClassifier for BayesianFilter {
    fn fit(&mut self, text: &str, category: &str) -> Result<()> {
        BayesianFilter::fit(self, text, category)
    }

    fn predict(&self, text: &str) -> Result<Prediction> {
        BayesianFilter::predict(self, text)
    }

    fn name(&self) -> &str {
        "naive_bayes"
    }
}

impl std::fmt::Debug for BayesianFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BayesianFilter")
            .field("analyzer", &self.analyzer.name())
            .field("categories", &self.model.category_counts().len())
            .field("vocabulary_size", &self.model.vocabulary_size())
            .finish()
    }
}
