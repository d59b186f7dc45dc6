//! Similarity metrics between a candidate text and a reference text.
//!
//! - [`overlap`]: Jaccard similarity and token F1 over token sets/multisets
//! - [`rouge`]: ROUGE-N and ROUGE-L (longest common subsequence)
//! - [`semantic`]: mean word-vector cosine similarity
//!
//! Lexical metrics share one convention for degenerate input: two empty
//! token sequences are identical (1.0) and one empty side has no possible
//! overlap (0.0).

pub mod overlap;
pub mod rouge;
pub mod semantic;

pub use overlap::{jaccard, token_f1};
pub use rouge::{
    RougeScore, lcs_length, ngrams, rouge_l, rouge_l_score, rouge_l_tokens, rouge_n,
    rouge_n_score, rouge_n_tokens,
};
pub use semantic::{DocumentVector, SemanticSimilarity, cosine_similarity};
