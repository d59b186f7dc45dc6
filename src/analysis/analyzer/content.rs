//! Content word analyzer backed by a language model.
//!
//! Tokenizes with the model, lowercases the surface form and drops every
//! token the model flags as stopword or punctuation.

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::content::ContentWordFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::model::ModelTokenizer;
use crate::embedding::LanguageModel;
use crate::error::Result;

/// Tokenize `text` into lowercase content words using `model`.
pub fn tokenize_content(model: Arc<dyn LanguageModel>, text: &str) -> Result<Vec<String>> {
    ContentAnalyzer::new(model).terms(text)
}

/// Analyzer producing lowercase content words.
#[derive(Clone)]
pub struct ContentAnalyzer {
    inner: PipelineAnalyzer,
}

impl ContentAnalyzer {
    /// Create a content analyzer over a shared model handle.
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(ModelTokenizer::new(model)))
            .add_filter(Arc::new(ContentWordFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("content");

        ContentAnalyzer { inner: analyzer }
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for ContentAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "content"
    }
}

impl std::fmt::Debug for ContentAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
