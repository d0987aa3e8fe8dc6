//! Text-level classifier interface.

use super::types::Prediction;
use crate::error::Result;

/// A classifier that is trained on and applied to raw text.
pub trait TextClassifier: Send + Sync {
    /// Learn one document of `category`.
    fn fit(&mut self, text: &str, category: &str) -> Result<()>;

    /// Classify `text`.
    fn predict(&self, text: &str) -> Result<Prediction>;

    /// Get the name of this classifier.
    fn name(&self) -> &str;
}
