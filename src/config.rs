//! Configuration for the filter's analyzer and top-K output.
//!
//! Every field has a default, so a configuration file only needs the settings
//! it changes:
//!
//! ```
//! use bayesian_filter::config::{FilterConfig, TokenizerConfig};
//!
//! let config: FilterConfig = serde_json::from_str(
//!     r#"{"analyzer": {"tokenizer": {"type": "whitespace"}, "stop_words": ["the"]}}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.analyzer.tokenizer, TokenizerConfig::Whitespace);
//! assert!(config.analyzer.lowercase);
//! assert_eq!(config.top_k.k, 3);
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::analyzer::standard::DEFAULT_PUNCTUATION_PATTERN;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::unicode_normalize::{
    NormalizationForm, UnicodeNormalizationCharFilter,
};
use crate::analysis::token::TokenType;
use crate::analysis::token_filter::{LowercaseFilter, StopFilter, TokenTypeKeepFilter};
use crate::analysis::tokenizer::{
    RegexTokenizer, Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer,
};
use crate::error::Result;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub analyzer: AnalyzerConfig,
    pub top_k: TopKConfig,
}

impl FilterConfig {
    /// Read a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Tokenizer selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenizerConfig {
    /// Unicode word boundaries.
    #[default]
    UnicodeWord,
    Whitespace,
    /// Every match of `pattern` is a token.
    Regex { pattern: String },
}

impl TokenizerConfig {
    fn build(&self) -> Result<Arc<dyn Tokenizer>> {
        Ok(match self {
            TokenizerConfig::UnicodeWord => Arc::new(UnicodeWordTokenizer::new()),
            TokenizerConfig::Whitespace => Arc::new(WhitespaceTokenizer::new()),
            TokenizerConfig::Regex { pattern } => {
                Arc::new(RegexTokenizer::with_pattern(pattern)?)
            }
        })
    }
}

/// Text analysis settings.
///
/// The defaults reproduce [`StandardAnalyzer`](crate::analysis::analyzer::StandardAnalyzer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub tokenizer: TokenizerConfig,
    /// Apply NFKC normalization before tokenizing.
    pub normalize: bool,
    /// Characters matching this pattern are replaced by a space. `None` keeps them.
    pub punctuation_pattern: Option<String>,
    pub lowercase: bool,
    /// Words removed after lowercasing.
    pub stop_words: Vec<String>,
    /// Only tokens of these types are counted. `None` keeps everything.
    pub keep_types: Option<Vec<TokenType>>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerConfig::default(),
            normalize: true,
            punctuation_pattern: Some(DEFAULT_PUNCTUATION_PATTERN.to_string()),
            lowercase: true,
            stop_words: Vec::new(),
            keep_types: None,
        }
    }
}

impl AnalyzerConfig {
    /// Build the analyzer pipeline these settings describe.
    pub fn build(&self) -> Result<Arc<dyn Analyzer>> {
        let mut analyzer = PipelineAnalyzer::new(self.tokenizer.build()?);

        if self.normalize {
            analyzer = analyzer.add_char_filter(Arc::new(UnicodeNormalizationCharFilter::new(
                NormalizationForm::NFKC,
            )));
        }
        if let Some(pattern) = &self.punctuation_pattern {
            analyzer =
                analyzer.add_char_filter(Arc::new(PatternReplaceCharFilter::new(pattern, " ")?));
        }
        if self.lowercase {
            analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new()));
        }
        if !self.stop_words.is_empty() {
            analyzer = analyzer.add_filter(Arc::new(StopFilter::from_words(&self.stop_words)));
        }
        if let Some(types) = &self.keep_types {
            analyzer =
                analyzer.add_filter(Arc::new(TokenTypeKeepFilter::new(types.iter().copied())));
        }

        Ok(Arc::new(analyzer.with_name("configured")))
    }
}

/// Defaults for top-K output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopKConfig {
    pub k: usize,
    /// Report raw log-scores instead of normalized confidences.
    pub as_log: bool,
}

impl Default for TopKConfig {
    fn default() -> Self {
        Self { k: 3, as_log: true }
    }
}
