//! Embedding-based semantic similarity.
//!
//! A text is represented by the mean of the vectors of its tokens
//! ([`SemanticSimilarity::text_vector`]); two texts are compared with the
//! cosine of their document vectors.

use std::sync::Arc;

use crate::analysis::token_filter::ContentWordFilter;
use crate::embedding::LanguageModel;
use crate::error::{EvalError, Result};
use crate::util::simd;

/// Mean word vector of a text, of length [`LanguageModel::dimension`].
pub type DocumentVector = Vec<f32>;

/// Cosine similarity of two vectors of equal length.
///
/// Returns 0.0 if either vector has zero norm. Vectors of different length
/// are rejected with [`EvalError::InvalidInput`].
///
/// ```
/// use eval_metrics::metrics::cosine_similarity;
///
/// let cos = cosine_similarity(&[1.0, 0.0], &[1.0, 1.0]).unwrap();
/// assert!((cos - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-6);
/// assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]).unwrap(), 0.0);
/// assert!(cosine_similarity(&[1.0], &[1.0, 0.0]).is_err());
/// ```
pub fn cosine_similarity(u: &[f32], v: &[f32]) -> Result<f64> {
    if u.len() != v.len() {
        return Err(EvalError::invalid_input(format!(
            "cannot compare vectors of length {} and {}",
            u.len(),
            v.len()
        )));
    }

    let norm_u = simd::numeric::magnitude(u);
    let norm_v = simd::numeric::magnitude(v);
    if norm_u == 0.0 || norm_v == 0.0 {
        return Ok(0.0);
    }

    let cos = simd::numeric::dot_product(u, v) as f64 / (norm_u as f64 * norm_v as f64);
    Ok(cos.clamp(-1.0, 1.0))
}

/// Semantic similarity backed by a shared language model.
#[derive(Clone)]
pub struct SemanticSimilarity {
    model: Arc<dyn LanguageModel>,
}

impl SemanticSimilarity {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        SemanticSimilarity { model }
    }

    pub fn model(&self) -> &Arc<dyn LanguageModel> {
        &self.model
    }

    /// Mean vector of the tokens of `text` that have an embedding.
    ///
    /// With `content_only`, stopwords and punctuation are dropped first.
    /// Falls back to the zero vector when no token has an embedding.
    pub fn text_vector(&self, text: &str, content_only: bool) -> Result<DocumentVector> {
        let mut sum = vec![0.0f32; self.model.dimension()];
        let mut count = 0usize;

        for token in self.model.tokenize(text)? {
            if content_only && !ContentWordFilter::is_content(&token) {
                continue;
            }
            if let Some(vector) = self.model.vector(&token.text) {
                simd::numeric::add_assign(&mut sum, vector);
                count += 1;
            }
        }

        if count > 0 {
            simd::numeric::scale(&mut sum, 1.0 / count as f32);
        }
        Ok(sum)
    }

    /// Cosine similarity of the document vectors of two texts.
    pub fn similarity(&self, a: &str, b: &str, content_only: bool) -> Result<f64> {
        let u = self.text_vector(a, content_only)?;
        let v = self.text_vector(b, content_only)?;
        cosine_similarity(&u, &v)
    }
}

impl std::fmt::Debug for SemanticSimilarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticSimilarity")
            .field("model", &self.model.name())
            .field("dimension", &self.model.dimension())
            .finish()
    }
}
