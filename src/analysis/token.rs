//! Token types and utilities for text analysis.
//!
//! A [`Token`] is the unit that flows from a tokenizer through token filters
//! into the metrics. Besides its text it carries the two flags the content
//! analyzer relies on: whether the token is a stopword (`stopped`) and its
//! [`TokenType`], which marks punctuation.
//!
//! # Examples
//!
//! ```
//! use eval_metrics::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("moon", 3, 14, 18);
//! assert_eq!(token.text, "moon");
//! assert!(!token.is_stopped());
//!
//! let comma = Token::new(",", 4).with_token_type(TokenType::Punctuation);
//! assert!(comma.is_punct());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the tokenized text
    pub start_offset: usize,

    /// The byte offset where this token ends in the tokenized text
    pub end_offset: usize,

    /// Whether this token has been marked as a stopword by a filter
    pub stopped: bool,

    /// Content classification of the token
    pub token_type: TokenType,
}

/// Token type classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Alphabetic or mixed alphanumeric text
    #[default]
    Alphanum,
    /// Numeric values
    Num,
    /// Punctuation and symbols
    Punctuation,
    /// Other/unknown token types
    Other,
}

impl TokenType {
    /// Classify a non-whitespace segment of text.
    ///
    /// A segment without any alphanumeric character is punctuation.
    pub fn detect(word: &str) -> Self {
        if word.is_empty() {
            return TokenType::Other;
        }

        if word.chars().all(|c| c.is_numeric()) {
            return TokenType::Num;
        }

        if !word.chars().any(|c| c.is_alphanumeric()) {
            return TokenType::Punctuation;
        }

        TokenType::Alphanum
    }
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            stopped: false,
            token_type: TokenType::Alphanum,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            start_offset,
            end_offset,
            ..Token::new(text, position)
        }
    }

    /// Get the length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Check if this token is punctuation.
    pub fn is_punct(&self) -> bool {
        self.token_type == TokenType::Punctuation
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
