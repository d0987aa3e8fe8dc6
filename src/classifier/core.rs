//! Helper functions for creating Bayesian filters and loading training data.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::warn;

use super::bayesian::BayesianFilter;
use super::types::TrainingSample;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::config::FilterConfig;
use crate::error::{BayesianFilterError, Result};

/// Load training samples from a JSON file.
///
/// The file holds either a JSON array of `{"text": ..., "category": ...}`
/// objects or one such object per line (JSON Lines). Unparseable lines of a
/// JSON Lines file are skipped with a warning.
pub fn load_training_data<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingSample>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    if content.trim_start().starts_with('[') {
        let samples: Vec<TrainingSample> = serde_json::from_str(&content)?;
        return Ok(samples);
    }

    let mut samples = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<TrainingSample>(line) {
            Ok(sample) => samples.push(sample),
            Err(e) => warn!(
                "skipping line {} of {}: {}",
                line_no + 1,
                path.display(),
                e
            ),
        }
    }

    if samples.is_empty() && !content.trim().is_empty() {
        return Err(BayesianFilterError::invalid_argument(format!(
            "no training samples found in {}",
            path.display()
        )));
    }

    Ok(samples)
}

/// Create an untrained filter whose analyzer is built from `config`.
pub fn new_bayesian_filter(config: &FilterConfig) -> Result<BayesianFilter> {
    let analyzer = config.analyzer.build()?;
    Ok(BayesianFilter::new(analyzer))
}

/// Create an untrained filter with the [`StandardAnalyzer`].
pub fn new_with_default_analyzer() -> Result<BayesianFilter> {
    Ok(BayesianFilter::new(Arc::new(StandardAnalyzer::new()?)))
}
