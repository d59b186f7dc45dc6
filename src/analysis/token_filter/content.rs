//! Content word filter: drops stopwords and punctuation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that keeps only content words.
///
/// Tokens that are marked stopped or typed as punctuation are removed. The
/// filter reads flags only; it never inspects the token text, so it must run
/// after whatever stage sets those flags.
#[derive(Clone, Debug, Default)]
pub struct ContentWordFilter;

impl ContentWordFilter {
    /// Create a new content word filter.
    pub fn new() -> Self {
        ContentWordFilter
    }

    /// Check whether a token is a content word.
    pub fn is_content(token: &Token) -> bool {
        !token.is_stopped() && !token.is_punct()
    }
}

impl Filter for ContentWordFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens.filter(Self::is_content).collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "content_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TokenType;

    #[test]
    fn test_content_word_filter() {
        let filter = ContentWordFilter::new();
        let tokens = vec![
            Token::new("the", 0).stop(),
            Token::new("moon", 1),
            Token::new(",", 2).with_token_type(TokenType::Punctuation),
            Token::new("landing", 3),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "moon");
        assert_eq!(result[1].text, "landing");
        assert_eq!(result[1].position, 3);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(ContentWordFilter::new().name(), "content_word");
    }
}
