//! Tokenizer backed by a language model.

use std::sync::Arc;

use super::Tokenizer;
use crate::analysis::token::{IntoTokenStream, TokenStream};
use crate::embedding::LanguageModel;
use crate::error::Result;

/// A tokenizer that delegates to the tokenization of a [`LanguageModel`].
///
/// Tokens keep the model's stopword and punctuation flags, so a
/// [`ContentWordFilter`](crate::analysis::token_filter::ContentWordFilter)
/// further down the pipeline can drop them.
#[derive(Clone)]
pub struct ModelTokenizer {
    model: Arc<dyn LanguageModel>,
}

impl ModelTokenizer {
    /// Create a tokenizer over the given model handle.
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        ModelTokenizer { model }
    }

    /// Get the model used by this tokenizer.
    pub fn model(&self) -> &Arc<dyn LanguageModel> {
        &self.model
    }
}

impl Tokenizer for ModelTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(self.model.tokenize(text)?.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "model"
    }
}

impl std::fmt::Debug for ModelTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelTokenizer")
            .field("model", &self.model.name())
            .finish()
    }
}
