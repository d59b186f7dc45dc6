//! Scoring aggregator.

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::embedding::LanguageModel;
use crate::error::Result;
use crate::metrics::rouge::{rouge_l_tokens, rouge_n_tokens};
use crate::metrics::semantic::{DocumentVector, SemanticSimilarity, cosine_similarity};
use crate::metrics::{jaccard, token_f1};
use crate::scoring::candidate::{Candidate, CandidateSet};
use crate::scoring::config::ScoringConfig;
use crate::scoring::table::{ScoreRow, ScoreTable};

/// Candidate sets at least this large are scored on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 64;

/// Score `candidates` against `reference` with a one-off [`Scorer`].
pub fn score_candidates(
    model: Arc<dyn LanguageModel>,
    reference: &str,
    candidates: &CandidateSet,
    config: ScoringConfig,
) -> Result<ScoreTable> {
    Scorer::new(model, config)?.score_candidates(reference, candidates)
}

/// Tokens and document vector of the reference, computed once per run.
struct PreparedReference {
    tokens: Vec<String>,
    vector: DocumentVector,
}

/// Computes every metric for a set of candidates against one reference.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use eval_metrics::embedding::WordVectorModel;
/// use eval_metrics::scoring::{CandidateSet, Scorer, ScoringConfig};
///
/// let model = WordVectorModel::from_entries(2, vec![
///     ("moon", vec![1.0, 0.0]),
///     ("mars", vec![0.0, 1.0]),
/// ]).unwrap();
/// let scorer = Scorer::new(Arc::new(model), ScoringConfig::default()).unwrap();
///
/// let candidates = CandidateSet::from_pairs([
///     ("far", "a trip to mars"),
///     ("near", "a trip to the moon"),
/// ]).unwrap();
/// let table = scorer.score_candidates("the moon", &candidates).unwrap();
///
/// assert_eq!(table.rows()[0].candidate, "near");
/// ```
#[derive(Clone)]
pub struct Scorer {
    analyzer: Arc<dyn Analyzer>,
    semantic: SemanticSimilarity,
    config: ScoringConfig,
}

impl Scorer {
    /// Create a scorer. The lexical tokenizer is chosen by
    /// [`ScoringConfig::tokenizer`].
    pub fn new(model: Arc<dyn LanguageModel>, config: ScoringConfig) -> Result<Self> {
        let analyzer = config.tokenizer.analyzer(model.clone())?;
        Ok(Scorer {
            analyzer,
            semantic: SemanticSimilarity::new(model),
            config,
        })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Score every candidate and rank the rows by semantic similarity.
    pub fn score_candidates(&self, reference: &str, candidates: &CandidateSet) -> Result<ScoreTable> {
        let reference = PreparedReference {
            tokens: self.analyzer.terms(reference)?,
            vector: self.semantic.text_vector(reference, self.config.content_only)?,
        };

        let candidates = candidates.as_slice();
        let rows = if candidates.len() < PARALLEL_THRESHOLD {
            candidates
                .iter()
                .map(|candidate| self.score_one(&reference, candidate))
                .collect::<Result<Vec<_>>>()?
        } else {
            debug!("scoring {} candidates in parallel", candidates.len());
            candidates
                .par_iter()
                .map(|candidate| self.score_one(&reference, candidate))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(ScoreTable::new(rows))
    }

    fn score_one(&self, reference: &PreparedReference, candidate: &Candidate) -> Result<ScoreRow> {
        let tokens = self.analyzer.terms(&candidate.text)?;
        let vector = self
            .semantic
            .text_vector(&candidate.text, self.config.content_only)?;

        let row = ScoreRow {
            candidate: candidate.name.clone(),
            jaccard: jaccard(&tokens, &reference.tokens),
            token_f1: token_f1(&tokens, &reference.tokens),
            rouge1: rouge_n_tokens(&tokens, &reference.tokens, 1).fmeasure,
            rouge2: rouge_n_tokens(&tokens, &reference.tokens, 2).fmeasure,
            rouge_l: rouge_l_tokens(&tokens, &reference.tokens).fmeasure,
            semantic: cosine_similarity(&vector, &reference.vector)?,
        };

        debug!(
            "scored candidate {} ({} tokens): semantic={:.4}",
            row.candidate,
            tokens.len(),
            row.semantic
        );
        Ok(row)
    }
}

impl std::fmt::Debug for Scorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scorer")
            .field("analyzer", &self.analyzer.name())
            .field("semantic", &self.semantic)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::tokenize_raw;
    use crate::embedding::WordVectorModel;
    use crate::scoring::config::TokenizerPolicy;

    fn model() -> Arc<dyn LanguageModel> {
        Arc::new(
            WordVectorModel::from_entries(
                3,
                vec![
                    ("moon", vec![1.0, 0.0, 0.0]),
                    ("lunar", vec![1.0, 0.0, 0.0]),
                    ("mars", vec![0.0, 1.0, 0.0]),
                    ("crew", vec![0.0, 0.0, 1.0]),
                ],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_rows_match_free_functions() {
        let scorer = Scorer::new(model(), ScoringConfig::default()).unwrap();
        let candidates =
            CandidateSet::from_pairs([("A", "The crew reached the lunar surface")]).unwrap();
        let reference = "The crew landed on the Moon";

        let table = scorer.score_candidates(reference, &candidates).unwrap();
        let row = &table.rows()[0];

        let cand = tokenize_raw("The crew reached the lunar surface").unwrap();
        let refr = tokenize_raw(reference).unwrap();
        assert_eq!(row.jaccard, jaccard(&cand, &refr));
        assert_eq!(row.token_f1, token_f1(&cand, &refr));
        assert_eq!(row.rouge1, rouge_n_tokens(&cand, &refr, 1).fmeasure);
        assert_eq!(row.rouge2, rouge_n_tokens(&cand, &refr, 2).fmeasure);
        assert_eq!(row.rouge_l, rouge_l_tokens(&cand, &refr).fmeasure);
        assert!((row.semantic - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ranked_by_semantic() {
        let scorer = Scorer::new(model(), ScoringConfig::default()).unwrap();
        let candidates =
            CandidateSet::from_pairs([("mars", "Mars"), ("moon", "the Moon"), ("mixed", "moon mars")])
                .unwrap();

        let table = scorer.score_candidates("lunar", &candidates).unwrap();
        let names: Vec<&str> = table.iter().map(|r| r.candidate.as_str()).collect();
        assert_eq!(names, vec!["moon", "mixed", "mars"]);
    }

    #[test]
    fn test_empty_candidate_set() {
        let scorer = Scorer::new(model(), ScoringConfig::default()).unwrap();
        let table = scorer.score_candidates("moon", &CandidateSet::new()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_content_tokenizer_ignores_stopwords() {
        let config = ScoringConfig::default().with_tokenizer(TokenizerPolicy::Content);
        let scorer = Scorer::new(model(), config).unwrap();
        let candidates = CandidateSet::from_pairs([("A", "It was the Moon!")]).unwrap();

        let table = scorer.score_candidates("moon", &candidates).unwrap();
        let row = &table.rows()[0];
        assert_eq!(row.jaccard, 1.0);
        assert_eq!(row.rouge_l, 1.0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let scorer = Scorer::new(model(), ScoringConfig::default()).unwrap();
        let texts = ["moon", "mars", "the crew", "lunar crew", "mars moon crew", ""];

        let pairs: Vec<(String, String)> = (0..PARALLEL_THRESHOLD + 6)
            .map(|i| (format!("c{i}"), texts[i % texts.len()].to_string()))
            .collect();
        let large = CandidateSet::from_pairs(pairs.clone()).unwrap();
        let parallel = scorer.score_candidates("the lunar crew", &large).unwrap();

        let mut rows = Vec::new();
        for (name, text) in &pairs {
            let single = CandidateSet::from_pairs([(name.as_str(), text.as_str())]).unwrap();
            rows.extend(scorer.score_candidates("the lunar crew", &single).unwrap().into_rows());
        }
        let sequential = ScoreTable::new(rows);

        assert_eq!(parallel, sequential);
    }
}
