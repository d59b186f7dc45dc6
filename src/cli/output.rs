//! Output formatting for CLI commands.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::args::{EvalArgs, OutputFormat};
use crate::error::Result;
use crate::scoring::table::{COLUMNS, ScoreTable, csv_field};

/// A titled score table, one per scoring run of a command.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    pub title: &'a str,
    pub table: &'a ScoreTable,
}

impl<'a> Section<'a> {
    pub fn new(title: &'a str, table: &'a ScoreTable) -> Self {
        Section { title, table }
    }
}

/// Print score tables in the format selected on the command line.
pub fn output_sections(sections: &[Section<'_>], args: &EvalArgs) -> Result<()> {
    let rendered = render_sections(sections, args.output_format, args.pretty)?;
    print!("{rendered}");
    Ok(())
}

/// Render score tables.
///
/// A single untitled table is rendered bare. Several tables are rendered as
/// titled blocks (human), an object keyed by title (JSON) or with a leading
/// `section` column (CSV).
pub fn render_sections(
    sections: &[Section<'_>],
    format: OutputFormat,
    pretty: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(render_human(sections)),
        OutputFormat::Json => render_json(sections, pretty),
        OutputFormat::Csv => Ok(render_csv(sections)),
    }
}

fn is_single(sections: &[Section<'_>]) -> bool {
    sections.len() == 1 && sections[0].title.is_empty()
}

fn render_human(sections: &[Section<'_>]) -> String {
    if is_single(sections) {
        return sections[0].table.to_string();
    }

    let blocks: Vec<String> = sections
        .iter()
        .map(|section| format!("=== {} ===\n{}", section.title, section.table))
        .collect();
    blocks.join("\n")
}

fn render_json(sections: &[Section<'_>], pretty: bool) -> Result<String> {
    let value = if is_single(sections) {
        serde_json::to_value(sections[0].table)?
    } else {
        let mut map = Map::new();
        for section in sections {
            map.insert(section.title.to_string(), serde_json::to_value(section.table)?);
        }
        Value::Object(map)
    };
    Ok(format!("{}\n", to_json_string(&value, pretty)?))
}

fn to_json_string<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

fn render_csv(sections: &[Section<'_>]) -> String {
    if is_single(sections) {
        return sections[0].table.to_csv();
    }

    let mut out = format!("section,{}\n", COLUMNS.join(","));
    for section in sections {
        // Reuse the table's CSV rows, skipping its header.
        for line in section.table.to_csv().lines().skip(1) {
            out.push_str(&csv_field(section.title));
            out.push(',');
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::table::ScoreRow;

    fn table(name: &str, semantic: f64) -> ScoreTable {
        ScoreTable::new(vec![ScoreRow {
            candidate: name.to_string(),
            jaccard: 0.5,
            token_f1: 0.5,
            rouge1: 0.5,
            rouge2: 0.25,
            rouge_l: 0.5,
            semantic,
        }])
    }

    #[test]
    fn test_single_table_human() {
        let t = table("A", 0.9);
        let out = render_sections(&[Section::new("", &t)], OutputFormat::Human, false).unwrap();
        assert_eq!(out, t.to_string());
    }

    #[test]
    fn test_sections_human() {
        let (a, b) = (table("A", 0.9), table("B", 0.1));
        let out = render_sections(
            &[Section::new("All tokens", &a), Section::new("Stopwords removed", &b)],
            OutputFormat::Human,
            false,
        )
        .unwrap();

        assert!(out.starts_with("=== All tokens ===\ncandidate"));
        assert!(out.contains("\n\n=== Stopwords removed ===\n"));
    }

    #[test]
    fn test_json() {
        let t = table("A", 0.9);
        let out = render_sections(&[Section::new("", &t)], OutputFormat::Json, false).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["candidate"], "A");

        let out = render_sections(&[Section::new("raw", &t)], OutputFormat::Json, true).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["raw"][0]["semantic"], 0.9);
        assert!(out.contains("\n  "));
    }

    #[test]
    fn test_csv_sections() {
        let (a, b) = (table("A", 0.9), table("B", 0.1));
        let out = render_sections(
            &[Section::new("raw", &a), Section::new("content", &b)],
            OutputFormat::Csv,
            false,
        )
        .unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines[0],
            "section,candidate,jaccard,token_f1,rouge1,rouge2,rougeL,semantic"
        );
        assert_eq!(lines[1], "raw,A,0.5,0.5,0.5,0.25,0.5,0.9");
        assert_eq!(lines[2], "content,B,0.5,0.5,0.5,0.25,0.5,0.1");
    }
}
