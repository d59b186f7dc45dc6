//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{EvalError, Result};

/// Pattern for raw word tokens: runs of lowercase ASCII letters, digits and
/// apostrophes. Input is expected to be lowercased already.
pub const RAW_WORD_PATTERN: &str = r"[a-z0-9']+";

/// A regex-based tokenizer that extracts every maximal match as a token.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the raw word pattern `[a-z0-9']+`.
    pub fn new() -> Result<Self> {
        Self::with_pattern(RAW_WORD_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| EvalError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Raw word pattern should be valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);

        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 11);
    }

    #[test]
    fn test_raw_pattern_keeps_apostrophes_and_digits() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<String> = tokenizer
            .tokenize("the apollo 11 mission's u.s. goal")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(
            tokens,
            vec!["the", "apollo", "11", "mission's", "u", "s", "goal"]
        );
    }

    #[test]
    fn test_raw_pattern_ignores_uppercase() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<String> = tokenizer
            .tokenize("Moon moon")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(tokens, vec!["oon", "moon"]);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(RegexTokenizer::with_pattern("[unclosed").is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::new().unwrap().name(), "regex");
    }
}
