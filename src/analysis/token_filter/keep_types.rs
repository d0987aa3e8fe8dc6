//! Token type keep filter.
//!
//! Restricts the vocabulary to selected kinds of words, e.g. dropping bare
//! numbers and punctuation so they never enter the word-count tables.

use std::collections::HashSet;

use crate::analysis::token::{TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that drops every token whose type is not in the keep set.
///
/// Tokens without a detected type are classified on the fly with
/// [`TokenType::detect`].
#[derive(Clone, Debug)]
pub struct TokenTypeKeepFilter {
    keep: HashSet<TokenType>,
}

impl TokenTypeKeepFilter {
    pub fn new<I: IntoIterator<Item = TokenType>>(types: I) -> Self {
        Self {
            keep: types.into_iter().collect(),
        }
    }

    /// Word-like tokens: everything except numbers, punctuation and unknowns.
    pub fn words() -> Self {
        Self::new([
            TokenType::Alphanum,
            TokenType::Cjk,
            TokenType::Katakana,
            TokenType::Hiragana,
            TokenType::Hangul,
        ])
    }

    pub fn keeps(&self, token_type: TokenType) -> bool {
        self.keep.contains(&token_type)
    }
}

impl Filter for TokenTypeKeepFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let kept: Vec<_> = tokens
            .filter(|token| {
                let token_type = token
                    .token_type
                    .unwrap_or_else(|| TokenType::detect(&token.text));
                self.keeps(token_type)
            })
            .collect();

        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "keep_types"
    }
}
