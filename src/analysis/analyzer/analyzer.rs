//! Core analyzer trait definition.
//!
//! An [`Analyzer`] is the tokenizer strategy the metrics are parameterized
//! by: it turns a text into a sequence of normalized terms.
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 … Filter N → Terms
//! ```
//!
//! # Available Implementations
//!
//! - [`RawAnalyzer`](super::RawAnalyzer) - lowercase `[a-z0-9']+` runs, stopwords kept
//! - [`ContentAnalyzer`](super::ContentAnalyzer) - model tokens without stopwords or punctuation
//! - [`PipelineAnalyzer`](super::PipelineAnalyzer) - custom char filter + tokenizer + filter chains
//!
//! # Examples
//!
//! ```
//! use eval_metrics::analysis::analyzer::{Analyzer, RawAnalyzer};
//!
//! let analyzer = RawAnalyzer::new().unwrap();
//! let terms = analyzer.terms("Hello, World!").unwrap();
//!
//! assert_eq!(terms, vec!["hello", "world"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so a single analyzer can be shared by
/// candidates scored in parallel.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze the text and collect the token texts in order.
    ///
    /// Duplicates are kept; downstream multiset metrics need the counts.
    fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}
