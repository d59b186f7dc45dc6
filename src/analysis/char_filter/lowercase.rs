//! Lowercasing char filter.
//!
//! # Examples
//!
//! ```
//! use eval_metrics::analysis::char_filter::CharFilter;
//! use eval_metrics::analysis::char_filter::lowercase::LowercaseCharFilter;
//!
//! let filter = LowercaseCharFilter::new();
//! assert_eq!(filter.filter("The Moon"), "the moon");
//! ```

use crate::analysis::char_filter::CharFilter;
use crate::util::simd;

/// A char filter that lowercases the whole input.
///
/// Used in front of tokenizers whose pattern only matches lowercase text.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        simd::ascii::to_lowercase(input)
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
