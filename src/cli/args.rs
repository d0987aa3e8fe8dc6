//! Command line argument parsing for the bayesian-filter CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// bayesian-filter - A multinomial Naive Bayes text classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "bayesian-filter")]
#[command(about = "Train and apply a multinomial Naive Bayes text classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct BayesianFilterArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Filter configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG", env = "BAYESIAN_FILTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl BayesianFilterArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a model from labelled samples
    Train(TrainArgs),

    /// Classify a text with a trained model
    Predict(PredictArgs),

    /// Show model statistics
    Stats(StatsArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Training samples (JSON array or JSON Lines of {"text", "category"})
    #[arg(value_name = "SAMPLES")]
    pub samples: PathBuf,

    /// Model base path; writes <MODEL_BASE>_word.json and <MODEL_BASE>_category.json
    #[arg(value_name = "MODEL_BASE")]
    pub model_base: PathBuf,

    /// Continue training an existing model instead of starting empty
    #[arg(short, long)]
    pub append: bool,
}

/// Arguments for prediction
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Model base path
    #[arg(value_name = "MODEL_BASE")]
    pub model_base: PathBuf,

    /// Text to classify
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Number of categories to report (default from the configuration)
    #[arg(short, long = "top-k")]
    pub k: Option<usize>,

    /// Report normalized confidences instead of log-scores
    #[arg(long)]
    pub confidence: bool,
}

/// Arguments for model statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Model base path
    #[arg(value_name = "MODEL_BASE")]
    pub model_base: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
