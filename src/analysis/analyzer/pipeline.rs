//! Pipeline analyzer that combines tokenizers and filters.
//!
//! The PipelineAnalyzer applies processing in this order:
//! 1. Char Filters: normalize the raw text
//! 2. Tokenizer: split text into tokens
//! 3. Token Filters: applied sequentially in the order they were added
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use eval_metrics::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use eval_metrics::analysis::token_filter::lowercase::LowercaseFilter;
//! use eval_metrics::analysis::token_filter::stop::StopFilter;
//! use eval_metrics::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["the", "on"])))
//!     .with_name("my_custom_analyzer");
//!
//! let terms = analyzer.terms("Landing on THE Moon").unwrap();
//! assert_eq!(terms, vec!["landing", "moon"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the configured name of this pipeline.
    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = if self.char_filters.is_empty() {
            self.tokenizer.tokenize(text)?
        } else {
            let filtered_text = self
                .char_filters
                .iter()
                .fold(text.to_string(), |acc, char_filter| char_filter.filter(&acc));
            self.tokenizer.tokenize(&filtered_text)?
        };

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        // The configured name is not 'static; see `pipeline_name`.
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
