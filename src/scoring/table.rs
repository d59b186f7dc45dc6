//! Score rows and the ranked score table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Column headers, in output order.
pub const COLUMNS: [&str; 7] = [
    "candidate", "jaccard", "token_f1", "rouge1", "rouge2", "rougeL", "semantic",
];

/// All metric values of one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub candidate: String,
    pub jaccard: f64,
    pub token_f1: f64,
    pub rouge1: f64,
    pub rouge2: f64,
    #[serde(rename = "rougeL")]
    pub rouge_l: f64,
    pub semantic: f64,
}

impl ScoreRow {
    /// Metric values in column order, without the candidate name.
    pub fn values(&self) -> [f64; 6] {
        [
            self.jaccard,
            self.token_f1,
            self.rouge1,
            self.rouge2,
            self.rouge_l,
            self.semantic,
        ]
    }
}

/// Score rows ranked by semantic similarity, highest first.
///
/// Rows with equal semantic similarity keep their insertion order.
///
/// ```
/// use eval_metrics::scoring::{ScoreRow, ScoreTable};
///
/// let row = |name: &str, semantic: f64| ScoreRow {
///     candidate: name.to_string(),
///     jaccard: 0.0,
///     token_f1: 0.0,
///     rouge1: 0.0,
///     rouge2: 0.0,
///     rouge_l: 0.0,
///     semantic,
/// };
///
/// let table = ScoreTable::new(vec![row("A", 0.2), row("B", 0.9), row("C", 0.2)]);
/// let names: Vec<_> = table.iter().map(|r| r.candidate.as_str()).collect();
/// assert_eq!(names, vec!["B", "A", "C"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ScoreRow>", into = "Vec<ScoreRow>")]
pub struct ScoreTable {
    rows: Vec<ScoreRow>,
}

impl ScoreTable {
    /// Rank `rows` by semantic similarity, descending.
    pub fn new(mut rows: Vec<ScoreRow>) -> Self {
        rows.sort_by(|a, b| b.semantic.total_cmp(&a.semantic));
        ScoreTable { rows }
    }

    pub fn rows(&self) -> &[ScoreRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<ScoreRow> {
        self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoreRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row of the named candidate.
    pub fn get(&self, candidate: &str) -> Option<&ScoreRow> {
        self.rows.iter().find(|row| row.candidate == candidate)
    }

    /// Render the table as CSV with a header line and full precision values.
    pub fn to_csv(&self) -> String {
        let mut out = COLUMNS.join(",");
        out.push('\n');
        for row in &self.rows {
            out.push_str(&csv_field(&row.candidate));
            for value in row.values() {
                out.push(',');
                out.push_str(&value.to_string());
            }
            out.push('\n');
        }
        out
    }
}

impl From<Vec<ScoreRow>> for ScoreTable {
    fn from(rows: Vec<ScoreRow>) -> Self {
        ScoreTable::new(rows)
    }
}

impl From<ScoreTable> for Vec<ScoreRow> {
    fn from(table: ScoreTable) -> Self {
        table.rows
    }
}

impl<'a> IntoIterator for &'a ScoreTable {
    type Item = &'a ScoreRow;
    type IntoIter = std::slice::Iter<'a, ScoreRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Quote a CSV field if it contains a separator, quote or line break.
pub(crate) fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

// Aligned columns, values rounded to 4 decimals.
impl fmt::Display for ScoreTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name_width = self
            .rows
            .iter()
            .map(|row| row.candidate.chars().count())
            .chain(std::iter::once(COLUMNS[0].len()))
            .max()
            .unwrap_or(0);

        write!(f, "{:<name_width$}", COLUMNS[0])?;
        for column in &COLUMNS[1..] {
            write!(f, "  {:>8}", column)?;
        }
        writeln!(f)?;

        for row in &self.rows {
            write!(f, "{:<name_width$}", row.candidate)?;
            for value in row.values() {
                write!(f, "  {:>8.4}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
