//! Text analysis: turning raw text into the token sequences the classifier counts.
//!
//! The classifier itself only ever sees `&[String]`. This module is the upstream
//! step that produces those sequences:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → tokens
//! ```
//!
//! Stopped tokens are dropped by [`analyzer::Analyzer::tokens`] before they reach
//! the counter.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
