//! Output formatting for CLI commands.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::cli::args::{BayesianFilterArgs, OutputFormat};
use crate::error::Result;

/// Result structure for training.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingResult {
    pub samples: usize,
    pub categories: usize,
    pub vocabulary_size: usize,
    pub word_path: String,
    pub category_path: String,
    pub duration_ms: u64,
}

/// Result structure for prediction.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResult {
    pub best_category: String,
    pub token_count: usize,
    /// Whether `top_k` holds log-scores (true) or confidences (false).
    pub as_log: bool,
    pub top_k: IndexMap<String, f64>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(
    message: &str,
    result: &T,
    args: &BayesianFilterArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &BayesianFilterArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation; key order is preserved
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().ends_with("PredictionResult") => {
            output_prediction_human(&value)
        }
        _ if std::any::type_name::<T>().ends_with("ModelStats") => output_model_stats_human(&value),
        _ => output_generic_human(&value),
    }
}

/// Output a prediction in human format.
fn output_prediction_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(best) = obj.get("best_category").and_then(|b| b.as_str()) {
            println!("Category: {best}");
        }
        if let Some(tokens) = obj.get("token_count").and_then(|t| t.as_u64()) {
            println!("Tokens: {tokens}");
        }

        let as_log = obj.get("as_log").and_then(|a| a.as_bool()).unwrap_or(true);
        if let Some(top) = obj.get("top_k").and_then(|t| t.as_object()) {
            println!();
            if as_log {
                println!("Top categories (log-score):");
            } else {
                println!("Top categories (confidence):");
            }
            println!("───────────────────────────");

            for (rank, (category, score)) in top.iter().enumerate() {
                let score = score.as_f64().unwrap_or(f64::NAN);
                if as_log {
                    println!("{:>3}. {category:<24} {score:>12.4}", rank + 1);
                } else {
                    println!("{:>3}. {category:<24} {:>11.2}%", rank + 1, score * 100.0);
                }
            }
        }
    }
    Ok(())
}

/// Output model statistics in human format.
fn output_model_stats_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        println!("Model Statistics:");
        println!("════════════════");

        if let Some(docs) = obj.get("documents").and_then(|d| d.as_u64()) {
            println!("Training documents: {docs}");
        }
        if let Some(size) = obj.get("vocabulary_size").and_then(|v| v.as_u64()) {
            println!("Vocabulary size: {size}");
        }

        if let Some(categories) = obj.get("categories").and_then(|c| c.as_array()) {
            println!();
            println!("Categories:");
            println!("───────────");

            for category in categories {
                let Some(stats) = category.as_object() else {
                    continue;
                };
                let name = stats
                    .get("category")
                    .and_then(|c| c.as_str())
                    .unwrap_or("unknown");
                let documents = stats.get("documents").and_then(|d| d.as_u64()).unwrap_or(0);
                let words = stats.get("words").and_then(|w| w.as_u64()).unwrap_or(0);
                let distinct = stats
                    .get("distinct_words")
                    .and_then(|d| d.as_u64())
                    .unwrap_or(0);
                println!("{name}: {documents} documents, {words} words ({distinct} distinct)");
            }
        }
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &BayesianFilterArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
