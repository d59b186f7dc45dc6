//! Command implementations for the eval-metrics CLI.

use std::fs;
use std::sync::Arc;
use std::time::Instant;

use log::info;

use crate::cli::args::{Command, EvalArgs, ScoreArgs};
use crate::cli::demo::{APOLLO_REFERENCE, apollo_candidates};
use crate::cli::output::{Section, output_sections};
use crate::embedding::{LanguageModel, WordVectorModel};
use crate::error::Result;
use crate::scoring::{ScoringConfig, ScoringRequest, Scorer, TokenizerPolicy};

/// Execute a CLI command.
pub fn execute_command(args: EvalArgs) -> Result<()> {
    let model = load_model(&args)?;

    match &args.command {
        Command::Demo => run_demo(model, &args),
        Command::Score(score_args) => run_score(score_args, model, &args),
    }
}

/// Load the word-vector model. Fails before any scoring if the file is
/// missing or unusable.
fn load_model(args: &EvalArgs) -> Result<Arc<dyn LanguageModel>> {
    let start_time = Instant::now();
    let model = WordVectorModel::load(&args.vectors)?;
    info!("model ready in {} ms", start_time.elapsed().as_millis());
    Ok(Arc::new(model))
}

/// Score the Apollo 11 example twice: raw tokens, then content words only.
fn run_demo(model: Arc<dyn LanguageModel>, args: &EvalArgs) -> Result<()> {
    let candidates = apollo_candidates()?;

    let all_tokens = Scorer::new(model.clone(), ScoringConfig::default())?
        .score_candidates(APOLLO_REFERENCE, &candidates)?;

    let content_config = ScoringConfig::default()
        .with_tokenizer(TokenizerPolicy::Content)
        .with_content_only(true);
    let stopwords_removed =
        Scorer::new(model, content_config)?.score_candidates(APOLLO_REFERENCE, &candidates)?;

    output_sections(
        &[
            Section::new("All tokens", &all_tokens),
            Section::new("Stopwords removed", &stopwords_removed),
        ],
        args,
    )
}

/// Score the candidates of a request file.
fn run_score(
    score_args: &ScoreArgs,
    model: Arc<dyn LanguageModel>,
    args: &EvalArgs,
) -> Result<()> {
    let config = score_args.scoring_config()?;
    let request = ScoringRequest::from_json(&fs::read_to_string(&score_args.request_file)?)?;
    info!(
        "scoring {} candidates from {} ({:?} tokenizer, content_only={})",
        request.candidates.len(),
        score_args.request_file.display(),
        config.tokenizer,
        config.content_only
    );

    let start_time = Instant::now();
    let table = Scorer::new(model, config)?
        .score_candidates(&request.reference, &request.candidates)?;
    info!("scored in {} ms", start_time.elapsed().as_millis());

    output_sections(&[Section::new("", &table)], args)
}
