//! Language model trait.

use crate::analysis::token::Token;
use crate::error::Result;

/// Trait for the tokenization and embedding backend.
///
/// Implementations are immutable once constructed. Failing to construct one
/// (missing data files, malformed vectors) is a startup error; per-call
/// methods never fail because the backend is unavailable.
///
/// # Examples
///
/// ```
/// use eval_metrics::analysis::token::Token;
/// use eval_metrics::embedding::LanguageModel;
/// use eval_metrics::error::Result;
///
/// struct ConstantModel;
///
/// impl LanguageModel for ConstantModel {
///     fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
///         Ok(text
///             .split_whitespace()
///             .enumerate()
///             .map(|(i, word)| Token::new(word, i))
///             .collect())
///     }
///
///     fn vector(&self, _token: &str) -> Option<&[f32]> {
///         Some(&[1.0, 0.0])
///     }
///
///     fn dimension(&self) -> usize {
///         2
///     }
/// }
///
/// let model = ConstantModel;
/// assert_eq!(model.tokenize("lunar samples").unwrap().len(), 2);
/// assert!(model.has_vector("anything"));
/// ```
pub trait LanguageModel: Send + Sync {
    /// Split text into tokens in appearance order.
    ///
    /// Tokens keep their surface form and carry the stopword flag
    /// ([`Token::stopped`]) and punctuation type.
    fn tokenize(&self, text: &str) -> Result<Vec<Token>>;

    /// Look up the embedding of a token, if the model knows it.
    fn vector(&self, token: &str) -> Option<&[f32]>;

    /// Dimensionality of every vector returned by [`vector`](Self::vector).
    fn dimension(&self) -> usize;

    /// Check whether the token has an embedding.
    fn has_vector(&self, token: &str) -> bool {
        self.vector(token).is_some()
    }

    /// Get the name/identifier of this model, used in logs.
    fn name(&self) -> &str {
        "unknown"
    }
}
