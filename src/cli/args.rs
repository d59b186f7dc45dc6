//! Command line argument parsing for the eval-metrics CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scoring::{ScoringConfig, TokenizerPolicy};

/// eval-metrics - rank candidate texts against a reference
#[derive(Parser, Debug, Clone)]
#[command(name = "eval-metrics")]
#[command(about = "Lexical and semantic similarity metrics for candidate texts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct EvalArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Word-vector file (GloVe or word2vec text format)
    #[arg(long, env = "EVAL_METRICS_VECTORS", value_name = "PATH")]
    pub vectors: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl EvalArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Score the built-in Apollo 11 example
    Demo,

    /// Score the candidates of a JSON request file
    Score(ScoreArgs),
}

/// Arguments for scoring a request file
#[derive(Parser, Debug, Clone)]
pub struct ScoreArgs {
    /// Request file: {"reference": "...", "candidates": {"name": "text", ...}}
    #[arg(value_name = "REQUEST_FILE")]
    pub request_file: PathBuf,

    /// Tokenizer for the lexical metrics (overrides the config file)
    #[arg(short, long)]
    pub tokenizer: Option<TokenizerPolicy>,

    /// Average only content-word vectors for the semantic metric
    #[arg(long)]
    pub content_only: bool,

    /// Scoring configuration file (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ScoreArgs {
    /// Resolve the scoring configuration: the config file if given, then
    /// command line flags on top.
    pub fn scoring_config(&self) -> Result<ScoringConfig> {
        let mut config = match &self.config {
            Some(path) => ScoringConfig::from_json_file(path)?,
            None => ScoringConfig::default(),
        };

        if let Some(tokenizer) = self.tokenizer {
            config = config.with_tokenizer(tokenizer);
        }
        if self.content_only {
            config = config.with_content_only(true);
        }
        Ok(config)
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_demo_command() {
        let args =
            EvalArgs::try_parse_from(["eval-metrics", "--vectors", "glove.txt", "demo"]).unwrap();

        assert_eq!(args.vectors, PathBuf::from("glove.txt"));
        assert!(matches!(args.command, Command::Demo));
        assert_eq!(args.output_format, OutputFormat::Human);
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_score_command() {
        let args = EvalArgs::try_parse_from([
            "eval-metrics",
            "--vectors",
            "glove.txt",
            "-f",
            "json",
            "--pretty",
            "score",
            "request.json",
            "--tokenizer",
            "content",
            "--content-only",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        if let Command::Score(score_args) = args.command {
            assert_eq!(score_args.request_file, PathBuf::from("request.json"));
            assert_eq!(score_args.tokenizer, Some(TokenizerPolicy::Content));
            assert!(score_args.content_only);
            assert!(score_args.config.is_none());
        } else {
            panic!("Expected Score command");
        }
    }

    #[test]
    fn test_verbosity() {
        let args = EvalArgs::try_parse_from(["eval-metrics", "--vectors", "v", "-vvv", "demo"])
            .unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = EvalArgs::try_parse_from(["eval-metrics", "--vectors", "v", "-vv", "-q", "demo"])
            .unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_invalid_tokenizer() {
        let result = EvalArgs::try_parse_from([
            "eval-metrics",
            "--vectors",
            "v",
            "score",
            "r.json",
            "--tokenizer",
            "spacy",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"tokenizer": "content"}}"#).unwrap();

        let score_args = ScoreArgs {
            request_file: PathBuf::from("r.json"),
            tokenizer: None,
            content_only: true,
            config: Some(file.path().to_path_buf()),
        };
        assert_eq!(
            score_args.scoring_config().unwrap(),
            ScoringConfig::default()
                .with_tokenizer(TokenizerPolicy::Content)
                .with_content_only(true)
        );

        let score_args = ScoreArgs {
            tokenizer: Some(TokenizerPolicy::Raw),
            content_only: false,
            ..score_args
        };
        let config = score_args.scoring_config().unwrap();
        assert_eq!(config.tokenizer, TokenizerPolicy::Raw);
        assert!(!config.content_only);
    }
}
