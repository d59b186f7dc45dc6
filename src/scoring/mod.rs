//! Candidate scoring.
//!
//! A [`Scorer`] evaluates every candidate of a [`CandidateSet`] against one
//! reference text with all metrics and returns a [`ScoreTable`] ranked by
//! semantic similarity.

pub mod candidate;
pub mod config;
pub mod scorer;
pub mod table;

pub use candidate::{Candidate, CandidateSet, ScoringRequest};
pub use config::{ScoringConfig, TokenizerPolicy};
pub use scorer::{PARALLEL_THRESHOLD, Scorer, score_candidates};
pub use table::{ScoreRow, ScoreTable};
