//! Latency benchmarks for pipeline inference
//!
//! Detection runs inline on the request path, so a single prediction over a
//! realistically sized vocabulary should stay well under a millisecond.
//!
//! Run with: cargo bench -p langid-classifiers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use langid_classifiers::{Classifier, PipelineArtifact, TextPipeline};
use serde_json::json;
use tokio::runtime::Runtime;

const CLASSES: [&str; 6] = ["en", "fr", "de", "python", "rust", "javascript"];

/// Synthetic pipeline with a dense trigram vocabulary over a-z and a few symbols
fn build_pipeline() -> TextPipeline {
    let alphabet: Vec<char> = "abcdefghijklmnopqrstuvwxyz (){};:=".chars().collect();
    let mut vocabulary = serde_json::Map::new();
    for a in &alphabet {
        for b in &alphabet {
            for c in &alphabet {
                let column = vocabulary.len();
                vocabulary.insert(format!("{a}{b}{c}"), json!(column));
            }
        }
    }
    let n_features = vocabulary.len();

    let coef: Vec<Vec<f64>> = (0..CLASSES.len())
        .map(|k| {
            (0..n_features)
                .map(|j| (((j * 31 + k * 17) % 97) as f64 - 48.0) / 48.0)
                .collect()
        })
        .collect();

    let artifact: PipelineArtifact = serde_json::from_value(json!({
        "name": "bench",
        "classes": CLASSES,
        "vectorizer": {
            "analyzer": "char",
            "ngram_range": [1, 3],
            "vocabulary": vocabulary,
            "sublinear_tf": true,
            "norm": "l2"
        },
        "estimator": {
            "type": "linear",
            "coef": coef,
            "intercept": vec![0.0; CLASSES.len()]
        }
    }))
    .expect("valid bench artifact");

    TextPipeline::from_artifact(artifact).expect("consistent bench artifact")
}

fn benchmark_pipeline_classify(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let pipeline = build_pipeline();

    let test_cases = vec![
        ("short_code", "def foo(): return 1"),
        ("short_prose", "Bonjour tout le monde"),
        (
            "medium_code",
            "fn main() { let xs: Vec<u32> = (0..10).collect(); println!(\"{:?}\", xs); }",
        ),
        (
            "medium_prose",
            "The quick brown fox jumps over the lazy dog while the cat watches from the window.",
        ),
    ];

    let mut group = c.benchmark_group("TextPipeline");
    group.significance_level(0.05);
    group.sample_size(100);

    for (name, text) in test_cases {
        group.bench_with_input(BenchmarkId::new("classify", name), &text, |b, text| {
            b.iter(|| rt.block_on(async { pipeline.classify(black_box(text)).await.unwrap() }));
        });
    }

    group.finish();
}

fn benchmark_vectorize_long_input(c: &mut Criterion) {
    let pipeline = build_pipeline();
    let text = "let total = items.iter().map(|x| x.price).sum::<f64>();\n".repeat(64);

    c.bench_function("TextPipeline/probabilities_4k_chars", |b| {
        b.iter(|| pipeline.probabilities(black_box(&text)))
    });
}

criterion_group!(
    benches,
    benchmark_pipeline_classify,
    benchmark_vectorize_long_input
);
criterion_main!(benches);
