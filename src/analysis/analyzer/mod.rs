//! Analyzer implementations that combine tokenizers and filters.

mod analyzer;
mod content;
mod pipeline;
mod raw;

pub use analyzer::Analyzer;
pub use content::{ContentAnalyzer, tokenize_content};
pub use pipeline::PipelineAnalyzer;
pub use raw::{RawAnalyzer, tokenize_raw};
