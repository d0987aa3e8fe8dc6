//! Case folding, so `Free`, `FREE` and `free` count as one vocabulary entry.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Lowercases the text of every token that is not stopped.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }

    fn fold(mut token: Token) -> Token {
        if token.is_stopped() {
            return token;
        }
        if token.text.is_ascii() {
            token.text.make_ascii_lowercase();
        } else if token.text.chars().any(char::is_uppercase) {
            token.text = token.text.to_lowercase();
        }
        token
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let folded: Vec<Token> = tokens.map(Self::fold).collect();
        Ok(Box::new(folded.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold_all(words: &[&str]) -> Vec<String> {
        let tokens: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(position, word)| Token::new(*word, position))
            .collect();
        LowercaseFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn test_mixed_case_words_collapse() {
        assert_eq!(fold_all(&["FREE", "Free", "free"]), vec!["free"; 3]);
    }

    #[test]
    fn test_non_ascii_case_folding() {
        assert_eq!(
            fold_all(&["ÉCOLE", "Straße", "ΣΟΦΙΑ", "東京"]),
            vec!["école", "straße", "σοφια", "東京"]
        );
    }

    #[test]
    fn test_stopped_tokens_keep_their_text() {
        let tokens = vec![Token::new("The", 0).stop(), Token::new("Cat", 1)];
        let result: Vec<Token> = LowercaseFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].text, "The");
        assert!(result[0].is_stopped());
        assert_eq!(result[1].text, "cat");
        assert_eq!(result[1].position, 1);
    }
}
