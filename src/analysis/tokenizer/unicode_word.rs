//! Unicode word tokenizer implementation.
//!
//! Splits text on Unicode word boundaries (UAX #29). Unlike a plain word
//! splitter it keeps punctuation segments as tokens typed
//! [`TokenType::Punctuation`], so later stages can tell content words from
//! punctuation. Whitespace segments are dropped.
//!
//! With [`UnicodeWordTokenizer::split_contractions`] enabled, English clitic
//! suffixes (`'s`, `'re`, `'ve`, `'ll`, `'d`, `'m`, `n't`) become tokens of
//! their own, so `didn't` yields `did` and `n't`.
//!
//! # Examples
//!
//! ```
//! use eval_metrics::analysis::tokenizer::Tokenizer;
//! use eval_metrics::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[0].text, "Hello");
//! assert!(tokens[1].is_punct());
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// English clitics split off a word, checked in order.
const CLITICS: &[&str] = &["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

/// A tokenizer that splits text on Unicode word boundaries.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer {
    split_contractions: bool,
}

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer::default()
    }

    /// Split English clitic suffixes into separate tokens.
    pub fn split_contractions(mut self, split: bool) -> Self {
        self.split_contractions = split;
        self
    }

    /// Byte offset where a clitic suffix of `segment` starts, if any.
    ///
    /// The stem must be non-empty. A typographic apostrophe matches `'`.
    fn clitic_start(segment: &str) -> Option<usize> {
        CLITICS.iter().find_map(|clitic| {
            let (start, _) = segment
                .char_indices()
                .rev()
                .nth(clitic.chars().count() - 1)?;
            let matches = start > 0
                && segment[start..]
                    .chars()
                    .map(|c| match c {
                        '\u{2019}' => '\'',
                        c => c.to_ascii_lowercase(),
                    })
                    .eq(clitic.chars());
            matches.then_some(start)
        })
    }

    fn segments<'a>(&self, start: usize, segment: &'a str) -> Vec<(usize, &'a str)> {
        if self.split_contractions {
            if let Some(split) = Self::clitic_start(segment) {
                return vec![(start, &segment[..split]), (start + split, &segment[split..])];
            }
        }
        vec![(start, segment)]
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split_word_bound_indices()
            .filter(|(_, segment)| !segment.chars().all(char::is_whitespace))
            .flat_map(|(start, segment)| self.segments(start, segment))
            .enumerate()
            .map(|(position, (start, segment))| {
                let text = segment.replace('\u{2019}', "'");
                Token::with_offsets(text, position, start, start + segment.len())
                    .with_token_type(TokenType::detect(segment))
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
