//! Static word-vector model.
//!
//! Loads a GloVe / word2vec style text file: one `word v1 v2 … vd` entry per
//! line, whitespace separated. A word2vec header line (`count dim`) is
//! skipped, blank lines are ignored, and every vector must share the same
//! dimension.
//!
//! Tokenization follows Unicode word boundaries with English clitics split
//! off (`mission's` → `mission` `'s`). Segments without any alphanumeric
//! character are punctuation, and stopwords are flagged with a
//! case-insensitive English list.
//!
//! # Examples
//!
//! ```
//! use eval_metrics::embedding::{LanguageModel, WordVectorModel};
//!
//! let model = WordVectorModel::from_entries(2, vec![
//!     ("moon", vec![1.0, 0.0]),
//!     ("mars", vec![0.0, 1.0]),
//! ]).unwrap();
//!
//! assert_eq!(model.dimension(), 2);
//! assert_eq!(model.vector("Moon"), Some(&[1.0, 0.0][..]));
//! assert!(model.vector("venus").is_none());
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use log::{info, warn};

use crate::analysis::token::Token;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::embedding::model::LanguageModel;
use crate::error::{EvalError, Result};

/// A language model made of a static word → vector table.
#[derive(Clone, Debug)]
pub struct WordVectorModel {
    name: String,
    dimension: usize,
    vectors: AHashMap<String, Vec<f32>>,
    tokenizer: UnicodeWordTokenizer,
    stop_filter: StopFilter,
}

impl WordVectorModel {
    /// Build a model from in-memory entries.
    ///
    /// Fails with [`EvalError::InvalidInput`] if `dimension` is zero or an
    /// entry has a different length. An empty entry list is accepted here so
    /// tests can model a backend that knows no words.
    pub fn from_entries<I, S>(dimension: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        if dimension == 0 {
            return Err(EvalError::invalid_input(
                "embedding dimension must be greater than zero",
            ));
        }

        let mut vectors = AHashMap::new();
        for (word, vector) in entries {
            let word = word.into();
            if vector.len() != dimension {
                return Err(EvalError::invalid_input(format!(
                    "vector for '{word}' has dimension {}, expected {dimension}",
                    vector.len()
                )));
            }
            vectors.insert(word, vector);
        }

        Ok(WordVectorModel {
            name: "in_memory".to_string(),
            dimension,
            vectors,
            tokenizer: UnicodeWordTokenizer::new().split_contractions(true),
            stop_filter: Self::default_stop_filter(),
        })
    }

    /// Load a model from a word-vector text file.
    ///
    /// A missing or unreadable file, a file without vectors, or vectors of
    /// mixed dimension are reported as [`EvalError::InvalidInput`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            EvalError::invalid_input(format!(
                "cannot open word vectors at {}: {e}",
                path.display()
            ))
        })?;

        let model = Self::from_reader(BufReader::new(file))?
            .with_name(path.display().to_string());
        info!(
            "Loaded {} word vectors of dimension {} from {}",
            model.len(),
            model.dimension,
            path.display()
        );
        Ok(model)
    }

    /// Parse a model from any buffered reader in word-vector text format.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dimension: Option<usize> = None;
        let mut entries: Vec<(String, Vec<f32>)> = Vec::new();

        let mut first_entry = true;

        for (line_num, line) in reader.lines().enumerate() {
            let line = line
                .map_err(|e| EvalError::invalid_input(format!("line {}: {e}", line_num + 1)))?;
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let rest: Vec<&str> = fields.collect();

            if std::mem::take(&mut first_entry) && Self::is_header(word, &rest) {
                dimension = rest[0].parse().ok();
                continue;
            }

            let vector: std::result::Result<Vec<f32>, _> =
                rest.iter().map(|v| v.parse::<f32>()).collect();
            let vector = match vector {
                Ok(vector) if !vector.is_empty() => vector,
                _ => {
                    warn!("Skipping malformed vector on line {}", line_num + 1);
                    continue;
                }
            };

            match dimension {
                None => dimension = Some(vector.len()),
                Some(expected) if expected != vector.len() => {
                    return Err(EvalError::invalid_input(format!(
                        "line {}: vector has dimension {}, expected {expected}",
                        line_num + 1,
                        vector.len()
                    )));
                }
                Some(_) => {}
            }

            entries.push((word.to_string(), vector));
        }

        if entries.is_empty() {
            return Err(EvalError::invalid_input(
                "word vector source contains no vectors",
            ));
        }

        Self::from_entries(dimension.unwrap_or_default(), entries)
    }

    fn is_header(word: &str, rest: &[&str]) -> bool {
        rest.len() == 1 && word.parse::<usize>().is_ok() && rest[0].parse::<usize>().is_ok()
    }

    fn default_stop_filter() -> StopFilter {
        StopFilter::new().remove_stopped(false).ignore_case(true)
    }

    /// Set the model name used in logs.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the stop filter used to flag stopwords.
    ///
    /// The filter is forced to mark instead of remove, since the semantic
    /// metric may still need stopword vectors.
    pub fn with_stop_filter(mut self, stop_filter: StopFilter) -> Self {
        self.stop_filter = stop_filter.remove_stopped(false);
        self
    }

    /// Number of known words.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Check whether the model knows no words.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl LanguageModel for WordVectorModel {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let tokens = self.stop_filter.filter(self.tokenizer.tokenize(text)?)?;
        Ok(tokens.collect())
    }

    fn vector(&self, token: &str) -> Option<&[f32]> {
        self.vectors
            .get(token)
            .or_else(|| self.vectors.get(&token.to_lowercase()))
            .map(Vec::as_slice)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        &self.name
    }
}
