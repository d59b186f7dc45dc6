//! Language model backends for tokenization and word embeddings.
//!
//! The semantic metric and the content analyzer only need three
//! capabilities from a model, captured by [`LanguageModel`]: tokenization
//! with stopword/punctuation flags, a vector per known token, and the fixed
//! embedding dimension. Models are loaded once and shared read-only as
//! `Arc<dyn LanguageModel>`.

pub mod model;
pub mod word_vectors;

pub use model::LanguageModel;
pub use word_vectors::WordVectorModel;
