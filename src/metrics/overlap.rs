//! Set and multiset overlap metrics.

use std::hash::Hash;

use ahash::{AHashMap, AHashSet};

/// Count occurrences of every item.
pub(crate) fn counts<T, I>(items: I) -> AHashMap<T, usize>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts = AHashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Size of the multiset intersection: the sum of per-item minimum counts.
pub(crate) fn multiset_overlap<T: Eq + Hash>(
    a: &AHashMap<T, usize>,
    b: &AHashMap<T, usize>,
) -> usize {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .map(|(item, &count)| count.min(large.get(item).copied().unwrap_or(0)))
        .sum()
}

/// Harmonic mean of precision and recall, 0.0 when both are zero.
pub(crate) fn f_measure(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        return 0.0;
    }
    2.0 * precision * recall / (precision + recall)
}

/// Jaccard similarity of two token sequences treated as sets.
///
/// Both empty → 1.0; exactly one empty → 0.0.
///
/// ```
/// use eval_metrics::metrics::jaccard;
///
/// let a = ["the", "moon", "the"];
/// let b = ["the", "mars"];
/// assert!((jaccard(&a, &b) - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn jaccard<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    let a: AHashSet<&str> = a.iter().map(AsRef::as_ref).collect();
    let b: AHashSet<&str> = b.iter().map(AsRef::as_ref).collect();

    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        _ => {}
    }

    let intersection = a.intersection(&b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

/// Token-level F1 of a prediction against a reference, as multisets.
///
/// Precision and recall divide the multiset overlap by the total token
/// counts of each side. Both empty → 1.0; exactly one empty → 0.0.
///
/// ```
/// use eval_metrics::metrics::token_f1;
///
/// let pred = ["moon", "moon", "rocks"];
/// let reference = ["moon", "samples"];
/// // overlap 1, precision 1/3, recall 1/2
/// assert!((token_f1(&pred, &reference) - 0.4).abs() < 1e-12);
/// ```
pub fn token_f1<S: AsRef<str>>(pred: &[S], reference: &[S]) -> f64 {
    match (pred.is_empty(), reference.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        _ => {}
    }

    let pred_counts: AHashMap<&str, usize> = counts(pred.iter().map(AsRef::as_ref));
    let ref_counts: AHashMap<&str, usize> = counts(reference.iter().map(AsRef::as_ref));
    let overlap = multiset_overlap(&pred_counts, &ref_counts) as f64;

    f_measure(overlap / pred.len() as f64, overlap / reference.len() as f64)
}
