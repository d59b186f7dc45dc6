//! # eval-metrics
//!
//! Scores candidate texts against a reference text with a battery of
//! similarity metrics and ranks them by semantic similarity.
//!
//! ## Features
//!
//! - Raw and content-word tokenization built from an analysis pipeline
//! - Jaccard similarity and token F1
//! - ROUGE-1, ROUGE-2 and ROUGE-L
//! - Cosine similarity of mean word vectors, SIMD accelerated
//! - Parallel scoring of large candidate sets
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use eval_metrics::embedding::WordVectorModel;
//! use eval_metrics::scoring::{CandidateSet, Scorer, ScoringConfig};
//!
//! let model = WordVectorModel::from_entries(2, vec![
//!     ("moon", vec![1.0, 0.0]),
//!     ("lunar", vec![0.9, 0.1]),
//!     ("mars", vec![0.0, 1.0]),
//! ]).unwrap();
//!
//! let candidates = CandidateSet::from_pairs([
//!     ("mars", "The crew landed on Mars."),
//!     ("moon", "The crew landed on the lunar surface."),
//! ]).unwrap();
//!
//! let scorer = Scorer::new(Arc::new(model), ScoringConfig::default()).unwrap();
//! let table = scorer.score_candidates("The crew landed on the Moon.", &candidates).unwrap();
//!
//! assert_eq!(table.rows()[0].candidate, "moon");
//! ```

pub mod analysis;
pub mod cli;
pub mod embedding;
pub mod error;
pub mod metrics;
pub mod scoring;
pub mod util;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, tokenize_content, tokenize_raw};
    pub use crate::embedding::{LanguageModel, WordVectorModel};
    pub use crate::error::{EvalError, Result};
    pub use crate::metrics::{
        cosine_similarity, jaccard, lcs_length, ngrams, rouge_l, rouge_n, token_f1,
    };
    pub use crate::scoring::{CandidateSet, ScoreTable, Scorer, ScoringConfig, score_candidates};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
