//! Text analysis for the lexical and semantic metrics.
//!
//! This module turns raw text into token sequences under the two tokenizer
//! policies the metrics use: raw regex words ([`RawAnalyzer`]) and content
//! words from the language model ([`ContentAnalyzer`]).

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
