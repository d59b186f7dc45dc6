//! Error types for the eval-metrics library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`EvalError`] enum. Degenerate metric inputs (empty texts, zero vectors)
//! are never errors; they are handled by the metric conventions.
//!
//! # Examples
//!
//! ```
//! use eval_metrics::error::{EvalError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(EvalError::invalid_input("vector file is empty"))
//! }
//!
//! match load() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for eval-metrics operations.
#[derive(Error, Debug)]
pub enum EvalError {
    /// I/O errors (reading vector files, request files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid input, including an unusable language model at startup
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with EvalError.
pub type Result<T> = std::result::Result<T, EvalError>;

impl EvalError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        EvalError::Analysis(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        EvalError::InvalidInput(msg.into())
    }
}
