//! Criterion benchmarks for eval-metrics.
//!
//! Covers the longest common subsequence at growing lengths, the lexical
//! metrics on realistic texts, document vectors, and full candidate
//! scoring below and above the parallel threshold.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use eval_metrics::analysis::analyzer::tokenize_raw;
use eval_metrics::embedding::{LanguageModel, WordVectorModel};
use eval_metrics::metrics::{SemanticSimilarity, jaccard, lcs_length, rouge_n_tokens, token_f1};
use eval_metrics::scoring::{CandidateSet, Scorer, ScoringConfig};

const WORDS: [&str; 24] = [
    "the", "apollo", "mission", "landed", "on", "moon", "crew", "returned", "safely", "to",
    "earth", "lunar", "samples", "surface", "experiments", "of", "cold", "war", "mars", "rocks",
    "science", "goal", "astronauts", "and",
];

/// Generate a pseudo-random text of `length` words.
fn generate_text(seed: usize, length: usize) -> String {
    (0..length)
        .map(|j| WORDS[(seed * 7 + j * 13 + j / 3) % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Deterministic vectors for every benchmark word.
fn generate_model(dimension: usize) -> Arc<dyn LanguageModel> {
    let entries = WORDS.iter().enumerate().map(|(i, word)| {
        let vector = (0..dimension)
            .map(|j| (i as f32 * 0.37 + j as f32 * 0.11).sin())
            .collect::<Vec<f32>>();
        (*word, vector)
    });
    Arc::new(WordVectorModel::from_entries(dimension, entries).unwrap())
}

fn generate_candidates(count: usize) -> CandidateSet {
    CandidateSet::from_pairs((0..count).map(|i| (format!("c{i}"), generate_text(i, 30 + i % 40))))
        .unwrap()
}

fn bench_lcs(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs_length");

    for length in [16, 64, 256, 1024] {
        let a = tokenize_raw(&generate_text(1, length)).unwrap();
        let b = tokenize_raw(&generate_text(2, length)).unwrap();

        group.throughput(Throughput::Elements((length * length) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |bench, _| {
            bench.iter(|| black_box(lcs_length(black_box(&a), black_box(&b))))
        });
    }

    group.finish();
}

fn bench_lexical(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexical");

    let candidate = tokenize_raw(&generate_text(3, 80)).unwrap();
    let reference = tokenize_raw(&generate_text(4, 60)).unwrap();

    group.bench_function("tokenize_raw", |b| {
        let text = generate_text(5, 80);
        b.iter(|| black_box(tokenize_raw(black_box(&text))))
    });
    group.bench_function("jaccard", |b| {
        b.iter(|| black_box(jaccard(black_box(&candidate), black_box(&reference))))
    });
    group.bench_function("token_f1", |b| {
        b.iter(|| black_box(token_f1(black_box(&candidate), black_box(&reference))))
    });
    group.bench_function("rouge2", |b| {
        b.iter(|| black_box(rouge_n_tokens(black_box(&candidate), black_box(&reference), 2)))
    });

    group.finish();
}

fn bench_text_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_vector");

    for dimension in [50, 300] {
        let semantic = SemanticSimilarity::new(generate_model(dimension));
        let text = generate_text(6, 80);

        group.bench_with_input(BenchmarkId::from_parameter(dimension), &dimension, |b, _| {
            b.iter(|| black_box(semantic.text_vector(black_box(&text), false)))
        });
    }

    group.finish();
}

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_candidates");
    group.sample_size(20);

    let scorer = Scorer::new(generate_model(300), ScoringConfig::default()).unwrap();
    let reference = generate_text(0, 60);

    for count in [4, 63, 64, 512] {
        let candidates = generate_candidates(count);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(scorer.score_candidates(black_box(&reference), &candidates)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lcs, bench_lexical, bench_text_vector, bench_scoring);
criterion_main!(benches);
