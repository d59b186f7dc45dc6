//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the raw text before it reaches the tokenizer. Token
//! offsets produced after a char filter refer to the filtered text.

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;

pub use lowercase::LowercaseCharFilter;
