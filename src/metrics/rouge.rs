//! ROUGE-N and ROUGE-L.
//!
//! Each metric comes in three flavours:
//!
//! - `*_tokens`: works on already tokenized sequences and returns a
//!   [`RougeScore`]
//! - `*_score`: tokenizes both texts with an [`Analyzer`] first
//! - `rouge_n` / `rouge_l`: like `*_score` but only the F-measure
//!
//! # Examples
//!
//! ```
//! use eval_metrics::analysis::analyzer::RawAnalyzer;
//! use eval_metrics::metrics::{rouge_l, rouge_n};
//!
//! let analyzer = RawAnalyzer::new().unwrap();
//! let reference = "the crew landed on the moon";
//!
//! assert_eq!(rouge_n(reference, reference, 2, &analyzer).unwrap(), 1.0);
//! assert_eq!(rouge_l("", "", &analyzer).unwrap(), 1.0);
//! assert_eq!(rouge_l("the moon", "", &analyzer).unwrap(), 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::metrics::overlap::{counts, f_measure, multiset_overlap};

/// Precision, recall and F-measure of a ROUGE comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RougeScore {
    pub precision: f64,
    pub recall: f64,
    pub fmeasure: f64,
}

impl RougeScore {
    /// Score of two identical (or both empty) sequences.
    pub const PERFECT: RougeScore = RougeScore {
        precision: 1.0,
        recall: 1.0,
        fmeasure: 1.0,
    };

    /// Score with no overlap at all.
    pub const ZERO: RougeScore = RougeScore {
        precision: 0.0,
        recall: 0.0,
        fmeasure: 0.0,
    };

    /// Build a score from a match count and the totals of both sides.
    ///
    /// A zero total on either side yields [`RougeScore::ZERO`].
    pub fn from_counts(matches: usize, candidate_total: usize, reference_total: usize) -> Self {
        if candidate_total == 0 || reference_total == 0 {
            return RougeScore::ZERO;
        }

        let precision = matches as f64 / candidate_total as f64;
        let recall = matches as f64 / reference_total as f64;
        RougeScore {
            precision,
            recall,
            fmeasure: f_measure(precision, recall),
        }
    }
}

/// Empty-input conventions shared by every ROUGE variant.
fn degenerate<S>(candidate: &[S], reference: &[S]) -> Option<RougeScore> {
    match (candidate.is_empty(), reference.is_empty()) {
        (true, true) => Some(RougeScore::PERFECT),
        (true, false) | (false, true) => Some(RougeScore::ZERO),
        (false, false) => None,
    }
}

/// Contiguous n-grams of `tokens`, in order.
///
/// Empty when `n` is zero or larger than the number of tokens.
///
/// ```
/// use eval_metrics::metrics::ngrams;
///
/// let grams = ngrams(&["a", "b", "c"], 2);
/// assert_eq!(grams, vec![&["a", "b"][..], &["b", "c"][..]]);
/// assert!(ngrams(&["a"], 2).is_empty());
/// ```
pub fn ngrams<S>(tokens: &[S], n: usize) -> Vec<&[S]> {
    if n == 0 {
        return Vec::new();
    }
    tokens.windows(n).collect()
}

/// ROUGE-N over token sequences.
pub fn rouge_n_tokens<S: AsRef<str>>(candidate: &[S], reference: &[S], n: usize) -> RougeScore {
    if let Some(score) = degenerate(candidate, reference) {
        return score;
    }

    let candidate: Vec<&str> = candidate.iter().map(AsRef::as_ref).collect();
    let reference: Vec<&str> = reference.iter().map(AsRef::as_ref).collect();

    let candidate_ngrams = ngrams(&candidate, n);
    let reference_ngrams = ngrams(&reference, n);
    let matches = multiset_overlap(
        &counts(candidate_ngrams.iter().copied()),
        &counts(reference_ngrams.iter().copied()),
    );

    RougeScore::from_counts(matches, candidate_ngrams.len(), reference_ngrams.len())
}

/// ROUGE-N of two texts tokenized by `analyzer`.
pub fn rouge_n_score(
    candidate_text: &str,
    reference_text: &str,
    n: usize,
    analyzer: &dyn Analyzer,
) -> Result<RougeScore> {
    let candidate = analyzer.terms(candidate_text)?;
    let reference = analyzer.terms(reference_text)?;
    Ok(rouge_n_tokens(&candidate, &reference, n))
}

/// ROUGE-N F-measure of two texts tokenized by `analyzer`.
pub fn rouge_n(
    candidate_text: &str,
    reference_text: &str,
    n: usize,
    analyzer: &dyn Analyzer,
) -> Result<f64> {
    Ok(rouge_n_score(candidate_text, reference_text, n, analyzer)?.fmeasure)
}

/// Length of the longest common subsequence of `a` and `b`.
///
/// Uses a single DP row of `b.len() + 1` cells; the diagonal value of the
/// previous row is carried in `prev`.
///
/// ```
/// use eval_metrics::metrics::lcs_length;
///
/// assert_eq!(lcs_length(&["a", "b", "c", "d"], &["a", "c", "d"]), 3);
/// assert_eq!(lcs_length::<&str>(&[], &["a"]), 0);
/// ```
pub fn lcs_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut dp = vec![0usize; b.len() + 1];

    for x in a {
        let mut prev = 0;
        for (j, y) in b.iter().enumerate() {
            let above = dp[j + 1];
            dp[j + 1] = if x == y {
                prev + 1
            } else {
                above.max(dp[j])
            };
            prev = above;
        }
    }

    dp[b.len()]
}

/// ROUGE-L over token sequences.
pub fn rouge_l_tokens<S: AsRef<str>>(candidate: &[S], reference: &[S]) -> RougeScore {
    if let Some(score) = degenerate(candidate, reference) {
        return score;
    }

    let candidate: Vec<&str> = candidate.iter().map(AsRef::as_ref).collect();
    let reference: Vec<&str> = reference.iter().map(AsRef::as_ref).collect();
    let lcs = lcs_length(&candidate, &reference);

    RougeScore::from_counts(lcs, candidate.len(), reference.len())
}

/// ROUGE-L of two texts tokenized by `analyzer`.
pub fn rouge_l_score(
    candidate_text: &str,
    reference_text: &str,
    analyzer: &dyn Analyzer,
) -> Result<RougeScore> {
    let candidate = analyzer.terms(candidate_text)?;
    let reference = analyzer.terms(reference_text)?;
    Ok(rouge_l_tokens(&candidate, &reference))
}

/// ROUGE-L F-measure of two texts tokenized by `analyzer`.
pub fn rouge_l(candidate_text: &str, reference_text: &str, analyzer: &dyn Analyzer) -> Result<f64> {
    Ok(rouge_l_score(candidate_text, reference_text, analyzer)?.fmeasure)
}
