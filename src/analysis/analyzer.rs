//! Analyzers: complete text-to-tokens pipelines.
//!
//! - [`pipeline::PipelineAnalyzer`] - Custom char filter + tokenizer + filter chains
//! - [`standard::StandardAnalyzer`] - The default pipeline used by the filter
//!
//! # Examples
//!
//! ```
//! use bayesian_filter::analysis::analyzer::Analyzer;
//! use bayesian_filter::analysis::analyzer::standard::StandardAnalyzer;
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let words = analyzer.tokens("Hello, (World)!").unwrap();
//! assert_eq!(words, vec!["hello", "world"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod pipeline;
pub mod standard;

pub use pipeline::PipelineAnalyzer;
pub use standard::StandardAnalyzer;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze the text and return the surface strings of the tokens that were
    /// not stopped, in input order.
    fn tokens(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .analyze(text)?
            .filter(|token| !token.is_stopped())
            .map(|token| token.text)
            .collect())
    }
}
