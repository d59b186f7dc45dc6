//! Scoring configuration.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, ContentAnalyzer, RawAnalyzer};
use crate::embedding::LanguageModel;
use crate::error::Result;

/// Which tokenizer the lexical metrics use.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerPolicy {
    /// Lowercase `[a-z0-9']+` runs, stopwords kept
    #[default]
    Raw,
    /// Model tokens without stopwords and punctuation
    Content,
}

impl TokenizerPolicy {
    /// Build the analyzer implementing this policy.
    pub fn analyzer(self, model: Arc<dyn LanguageModel>) -> Result<Arc<dyn Analyzer>> {
        Ok(match self {
            TokenizerPolicy::Raw => Arc::new(RawAnalyzer::new()?),
            TokenizerPolicy::Content => Arc::new(ContentAnalyzer::new(model)),
        })
    }
}

/// Options of a scoring run.
///
/// ```
/// use eval_metrics::scoring::{ScoringConfig, TokenizerPolicy};
///
/// let config = ScoringConfig::default()
///     .with_tokenizer(TokenizerPolicy::Content)
///     .with_content_only(true);
///
/// assert_eq!(config.tokenizer, TokenizerPolicy::Content);
/// assert!(config.content_only);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Tokenizer for the lexical metrics.
    pub tokenizer: TokenizerPolicy,
    /// Average only content-word vectors for the semantic metric.
    pub content_only: bool,
}

impl ScoringConfig {
    pub fn with_tokenizer(mut self, tokenizer: TokenizerPolicy) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn with_content_only(mut self, content_only: bool) -> Self {
        self.content_only = content_only;
        self
    }

    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
