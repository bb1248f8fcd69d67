//! Loading pipeline artifacts from disk and running inference on them

use langid_classifiers::{load_classifier, load_pipeline, try_load_classifier, Classifier};
use langid_core::Error;
use proptest::prelude::*;
use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

/// Three-class linear model over character unigrams and bigrams
fn artifact() -> Value {
    json!({
        "name": "langid-test",
        "version": "1",
        "classes": ["en", "fr", "python"],
        "vectorizer": {
            "analyzer": "char_wb",
            "ngram_range": [1, 2],
            "vocabulary": {
                "th": 0, "he": 1, "ou": 2, "jo": 3, "de": 4, "ef": 5, "(": 6, ":": 7
            },
            "idf": [1.2, 1.1, 1.3, 1.5, 1.4, 1.6, 1.9, 1.8],
            "sublinear_tf": true,
            "norm": "l2"
        },
        "estimator": {
            "type": "linear",
            "multi_class": "multinomial",
            "coef": [
                [3.0, 3.0, 0.0, 0.0, 0.0, 0.0, -1.0, -1.0],
                [0.0, 0.0, 3.0, 3.0, 0.5, 0.0, -1.0, -1.0],
                [0.0, 0.0, 0.0, 0.0, 1.5, 3.0, 3.0, 3.0]
            ],
            "intercept": [0.1, 0.0, -0.1]
        }
    })
}

fn write_artifact(value: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(value.to_string().as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn test_load_and_classify() {
    let file = write_artifact(&artifact());
    let classifier = load_classifier(file.path()).unwrap();

    assert_eq!(classifier.name(), "langid-test");
    assert_eq!(classifier.classes(), ["en", "fr", "python"]);

    let code = classifier.classify("def foo(): return 1").await.unwrap();
    assert_eq!(code.label, "python");

    let french = classifier.classify("Bonjour tout le monde").await.unwrap();
    assert_eq!(french.label, "fr");

    let english = classifier.classify("the weather").await.unwrap();
    assert_eq!(english.label, "en");
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_pipeline(dir.path().join("trained_model.json")).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_load_malformed_json() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"\x80\x04\x95 not json").unwrap();

    let err = load_pipeline(file.path()).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn test_load_inconsistent_artifact() {
    let mut value = artifact();
    value["vectorizer"]["idf"] = json!([1.0, 2.0]);
    let file = write_artifact(&value);

    let err = load_pipeline(file.path()).unwrap_err();
    assert!(matches!(err, Error::Model(_)));
}

#[test]
fn test_try_load_degrades_to_none() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let dir = tempfile::tempdir().unwrap();
    assert!(try_load_classifier(dir.path().join("missing.json")).is_none());

    let mut value = artifact();
    value["classes"] = json!([]);
    let file = write_artifact(&value);
    assert!(try_load_classifier(file.path()).is_none());

    let file = write_artifact(&artifact());
    assert!(try_load_classifier(file.path()).is_some());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn probabilities_form_a_distribution(text in "\\PC{1,80}") {
        let file = write_artifact(&artifact());
        let pipeline = load_pipeline(file.path()).unwrap();

        let p = pipeline.probabilities(&text);
        prop_assert_eq!(p.len(), 3);
        prop_assert!(p.iter().all(|x| (0.0..=1.0).contains(x)));
        prop_assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-9);

        let label = pipeline.label(&text).unwrap();
        let best = p.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let idx = ["en", "fr", "python"].iter().position(|c| *c == label).unwrap();
        prop_assert_eq!(p[idx], best);
    }
}
