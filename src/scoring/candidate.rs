//! Named candidate texts and scoring requests.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::{EvalError, Result};

/// A candidate text with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub name: String,
    pub text: String,
}

/// An ordered set of candidates with unique names.
///
/// Insertion order is kept; it decides the order of rows that tie on
/// semantic similarity.
///
/// ```
/// use eval_metrics::scoring::CandidateSet;
///
/// let mut candidates = CandidateSet::new();
/// candidates.insert("A", "The crew landed on the Moon.").unwrap();
/// candidates.insert("B", "The crew returned safely.").unwrap();
///
/// assert_eq!(candidates.len(), 2);
/// assert!(candidates.insert("A", "again").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    candidates: Vec<Candidate>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from `(name, text)` pairs, failing on the first
    /// duplicate name.
    pub fn from_pairs<I, N, T>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: Into<String>,
    {
        let mut set = Self::new();
        for (name, text) in pairs {
            set.insert(name, text)?;
        }
        Ok(set)
    }

    /// Append a candidate. Names must be unique within the set.
    pub fn insert<N: Into<String>, T: Into<String>>(&mut self, name: N, text: T) -> Result<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(EvalError::invalid_input(format!(
                "duplicate candidate name: {name}"
            )));
        }
        self.candidates.push(Candidate {
            name,
            text: text.into(),
        });
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Text of the candidate with the given name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.candidates
            .iter()
            .find(|candidate| candidate.name == name)
            .map(|candidate| candidate.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.candidates
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Represented as a JSON object `{name: text}`. Key order is kept and
// repeated keys are rejected.
impl Serialize for CandidateSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for candidate in self {
            map.serialize_entry(&candidate.name, &candidate.text)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CandidateSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct CandidateSetVisitor;

        impl<'de> Visitor<'de> for CandidateSetVisitor {
            type Value = CandidateSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of candidate names to texts")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<CandidateSet, A::Error> {
                let mut set = CandidateSet::new();
                while let Some((name, text)) = map.next_entry::<String, String>()? {
                    set.insert(name, text).map_err(de::Error::custom)?;
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(CandidateSetVisitor)
    }
}

/// A reference text and the candidates to score against it.
///
/// ```
/// use eval_metrics::scoring::ScoringRequest;
///
/// let request: ScoringRequest = serde_json::from_str(r#"{
///     "reference": "Apollo 11 landed on the Moon.",
///     "candidates": {"B": "second", "A": "first"}
/// }"#).unwrap();
///
/// let names: Vec<_> = request.candidates.iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, vec!["B", "A"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRequest {
    pub reference: String,
    pub candidates: CandidateSet,
}

impl ScoringRequest {
    /// Parse a request from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
