//! Raw word analyzer.
//!
//! Lowercases the text and extracts maximal runs of `[a-z0-9']+`. Stopwords
//! and duplicates are kept.
//!
//! # Examples
//!
//! ```
//! use eval_metrics::analysis::analyzer::tokenize_raw;
//!
//! let terms = tokenize_raw("The Apollo 11 mission's goal, the Moon.").unwrap();
//! assert_eq!(terms, vec!["the", "apollo", "11", "mission's", "goal", "the", "moon"]);
//! ```

use std::sync::{Arc, LazyLock};

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::LowercaseCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

static DEFAULT_RAW_ANALYZER: LazyLock<RawAnalyzer> = LazyLock::new(RawAnalyzer::default);

/// Tokenize `text` with the shared raw analyzer.
pub fn tokenize_raw(text: &str) -> Result<Vec<String>> {
    DEFAULT_RAW_ANALYZER.terms(text)
}

/// Analyzer producing lowercase regex word tokens.
pub struct RawAnalyzer {
    inner: PipelineAnalyzer,
}

impl RawAnalyzer {
    /// Create a new raw analyzer.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .with_name("raw");

        Ok(RawAnalyzer { inner: analyzer })
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for RawAnalyzer {
    fn default() -> Self {
        Self::new().expect("Raw analyzer should be creatable with default settings")
    }
}

impl Analyzer for RawAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "raw"
    }
}

impl std::fmt::Debug for RawAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
