//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw string before it reaches the tokenizer.
//!
//! - [`unicode_normalize::UnicodeNormalizationCharFilter`] - Unicode normalization (NFC, NFD, etc.)
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use bayesian_filter::analysis::char_filter::CharFilter;
//! use bayesian_filter::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"[,\.!]", " ").unwrap();
//! assert_eq!(filter.filter("Hello, world!"), "Hello  world ");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod pattern_replace;
pub mod unicode_normalize;
