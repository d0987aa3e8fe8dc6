//! Token filter implementations for token transformation.
//!
//! - [`lowercase::LowercaseFilter`] - Case folding
//! - [`stop::StopFilter`] - Removes stop words
//! - [`keep_types::TokenTypeKeepFilter`] - Keeps only selected token types

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod keep_types;
pub mod lowercase;
pub mod stop;

pub use keep_types::TokenTypeKeepFilter;
pub use lowercase::LowercaseFilter;
pub use stop::StopFilter;
