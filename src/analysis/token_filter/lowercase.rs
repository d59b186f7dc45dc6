//! Lowercase filter implementation.
//!
//! # Examples
//!
//! ```
//! use eval_metrics::analysis::token_filter::Filter;
//! use eval_metrics::analysis::token_filter::lowercase::LowercaseFilter;
//! use eval_metrics::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Apollo", 0), Token::new("MOON", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "apollo");
//! assert_eq!(filtered[1].text, "moon");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::util::simd;

/// A filter that converts tokens to lowercase.
///
/// Every token is lowercased, stopped tokens included, so the surface form
/// emitted by the content analyzer is always normalized. Positions, offsets
/// and flags are preserved.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| token.with_text(simd::ascii::to_lowercase(&token.text)))
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![
            Token::new("Hello", 0),
            Token::new("WORLD", 1),
            Token::new("The", 2).stop(),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "the");
        assert!(result[2].is_stopped());
    }

    #[test]
    fn test_non_ascii() {
        let filter = LowercaseFilter::new();
        let tokens = vec![Token::new("ÉTÉ", 0)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "été");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
