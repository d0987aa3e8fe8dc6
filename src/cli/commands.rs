//! Command implementations for the bayesian-filter CLI.

use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::classifier::{BayesianFilter, load_training_data, new_bayesian_filter};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::FilterConfig;
use crate::error::{BayesianFilterError, Result};

/// Execute a CLI command.
pub fn execute_command(args: BayesianFilterArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Train(train_args) => train(train_args, &config, &args),
        Command::Predict(predict_args) => predict(predict_args, &config, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &config, &args),
    }
}

fn load_config(args: &BayesianFilterArgs) -> Result<FilterConfig> {
    match &args.config {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            FilterConfig::from_file(path)
        }
        None => Ok(FilterConfig::default()),
    }
}

/// Train a model on a sample file and save it.
fn train(args: &TrainArgs, config: &FilterConfig, cli_args: &BayesianFilterArgs) -> Result<()> {
    let start_time = Instant::now();

    let samples = load_training_data(&args.samples)?;
    info!(
        "loaded {} samples from {}",
        samples.len(),
        args.samples.display()
    );

    let mut filter = new_bayesian_filter(config)?;
    if args.append {
        filter.load(&args.model_base)?;
    }

    filter.fit_samples(&samples)?;
    let paths = filter.save(&args.model_base)?;

    let model = filter.model();
    output_result(
        "Model trained successfully",
        &TrainingResult {
            samples: samples.len(),
            categories: model.category_counts().len(),
            vocabulary_size: model.vocabulary_size(),
            word_path: paths.word.to_string_lossy().to_string(),
            category_path: paths.category.to_string_lossy().to_string(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Classify a text with a saved model.
fn predict(args: &PredictArgs, config: &FilterConfig, cli_args: &BayesianFilterArgs) -> Result<()> {
    let filter = open_filter(&args.model_base, config)?;

    let k = args.k.unwrap_or(config.top_k.k);
    if k == 0 {
        return Err(BayesianFilterError::invalid_argument(
            "top-k must be at least 1",
        ));
    }
    let as_log = !args.confidence && config.top_k.as_log;

    let prediction = filter.predict(&args.text)?;
    let top_k = prediction.top_k(filter.model(), k, as_log);

    output_result(
        "Prediction",
        &PredictionResult {
            best_category: prediction.best_category,
            token_count: prediction.token_count,
            as_log,
            top_k,
        },
        cli_args,
    )
}

/// Show the statistics of a saved model.
fn show_stats(args: &StatsArgs, config: &FilterConfig, cli_args: &BayesianFilterArgs) -> Result<()> {
    let filter = open_filter(&args.model_base, config)?;
    output_result("Model statistics", &filter.model().stats(), cli_args)
}

fn open_filter(model_base: &Path, config: &FilterConfig) -> Result<BayesianFilter> {
    let analyzer = config.analyzer.build()?;
    BayesianFilter::from_path(model_base, analyzer)
}
