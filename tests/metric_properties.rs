//! Algebraic properties of the metrics over a set of sample texts.

use std::sync::Arc;

use eval_metrics::analysis::analyzer::{Analyzer, RawAnalyzer, tokenize_raw};
use eval_metrics::embedding::WordVectorModel;
use eval_metrics::metrics::{
    SemanticSimilarity, cosine_similarity, jaccard, lcs_length, rouge_l, rouge_l_tokens, rouge_n,
    rouge_n_tokens, token_f1,
};

const SAMPLES: &[&str] = &[
    "",
    "moon",
    "The Moon, the Moon!",
    "Apollo 11 landed on the Moon in 1969.",
    "The crew returned safely to Earth after the lunar landing.",
    "Mars rovers collected samples from the Martian surface.",
    "the the the",
    "--- ... !!!",
];

fn tokens(text: &str) -> Vec<String> {
    tokenize_raw(text).unwrap()
}

fn pairs() -> impl Iterator<Item = (&'static str, &'static str)> {
    SAMPLES
        .iter()
        .flat_map(|a| SAMPLES.iter().map(move |b| (*a, *b)))
}

#[test]
fn test_lexical_metrics_are_bounded() {
    let analyzer = RawAnalyzer::new().unwrap();

    for (a, b) in pairs() {
        let (ta, tb) = (tokens(a), tokens(b));
        let values = [
            jaccard(&ta, &tb),
            token_f1(&ta, &tb),
            rouge_n(a, b, 1, &analyzer).unwrap(),
            rouge_n(a, b, 2, &analyzer).unwrap(),
            rouge_l(a, b, &analyzer).unwrap(),
        ];
        for value in values {
            assert!((0.0..=1.0).contains(&value), "{value} out of range for {a:?} / {b:?}");
        }
    }
}

#[test]
fn test_symmetric_metrics() {
    for (a, b) in pairs() {
        let (ta, tb) = (tokens(a), tokens(b));
        assert_eq!(jaccard(&ta, &tb), jaccard(&tb, &ta));
        assert!((token_f1(&ta, &tb) - token_f1(&tb, &ta)).abs() < 1e-12);
        assert_eq!(lcs_length(&ta, &tb), lcs_length(&tb, &ta));
    }
}

#[test]
fn test_rouge_precision_recall_swap() {
    for (a, b) in pairs() {
        let (ta, tb) = (tokens(a), tokens(b));
        let forward = rouge_l_tokens(&ta, &tb);
        let backward = rouge_l_tokens(&tb, &ta);
        assert_eq!(forward.precision, backward.recall);
        assert_eq!(forward.recall, backward.precision);

        let forward = rouge_n_tokens(&ta, &tb, 1);
        let backward = rouge_n_tokens(&tb, &ta, 1);
        assert_eq!(forward.precision, backward.recall);
    }
}

#[test]
fn test_reflexive_metrics() {
    let analyzer = RawAnalyzer::new().unwrap();

    for text in SAMPLES {
        let t = tokens(text);
        assert_eq!(jaccard(&t, &t), 1.0);
        assert_eq!(token_f1(&t, &t), 1.0);
        assert_eq!(rouge_l(text, text, &analyzer).unwrap(), 1.0);
        for n in 1..=t.len() {
            assert_eq!(rouge_n(text, text, n, &analyzer).unwrap(), 1.0);
        }
    }
}

#[test]
fn test_lcs_bounded_by_shorter_sequence() {
    for (a, b) in pairs() {
        let (ta, tb) = (tokens(a), tokens(b));
        assert!(lcs_length(&ta, &tb) <= ta.len().min(tb.len()));
    }
}

#[test]
fn test_empty_conventions() {
    let analyzer = RawAnalyzer::new().unwrap();
    let empty: Vec<String> = Vec::new();
    let some = tokens("the moon");

    assert_eq!(jaccard(&empty, &empty), 1.0);
    assert_eq!(token_f1(&empty, &empty), 1.0);
    assert_eq!(jaccard(&empty, &some), 0.0);
    assert_eq!(token_f1(&some, &empty), 0.0);

    // Symbol-only text tokenizes to nothing.
    assert_eq!(rouge_n("!!!", "...", 1, &analyzer).unwrap(), 1.0);
    assert_eq!(rouge_l("", "the moon", &analyzer).unwrap(), 0.0);
    assert_eq!(rouge_n("moon", "moon", 2, &analyzer).unwrap(), 0.0);
}

#[test]
fn test_analyzer_is_object_safe() {
    let analyzers: Vec<Box<dyn Analyzer>> = vec![Box::new(RawAnalyzer::new().unwrap())];
    for analyzer in &analyzers {
        assert_eq!(rouge_n("a b", "a b", 2, analyzer.as_ref()).unwrap(), 1.0);
    }
}

#[test]
fn test_semantic_properties() {
    let model = WordVectorModel::from_entries(
        4,
        vec![
            ("moon", vec![0.9, 0.1, 0.0, 0.2]),
            ("lunar", vec![0.8, 0.2, 0.1, 0.1]),
            ("mars", vec![0.1, 0.9, 0.3, 0.0]),
            ("crew", vec![0.0, 0.3, 0.9, 0.4]),
            ("landing", vec![0.2, 0.2, 0.5, 0.9]),
        ],
    )
    .unwrap();
    let semantic = SemanticSimilarity::new(Arc::new(model));

    for (a, b) in pairs() {
        let u = semantic.text_vector(a, false).unwrap();
        let v = semantic.text_vector(b, false).unwrap();
        assert_eq!(u.len(), 4);

        let cos = cosine_similarity(&u, &v).unwrap();
        assert!((-1.0..=1.0).contains(&cos));
        assert_eq!(cos, cosine_similarity(&v, &u).unwrap());

        if u.iter().any(|x| *x != 0.0) {
            assert!((cosine_similarity(&u, &u).unwrap() - 1.0).abs() < 1e-6);
        } else {
            assert_eq!(cosine_similarity(&u, &u).unwrap(), 0.0);
        }
    }
}
