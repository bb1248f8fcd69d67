//! Serialized form of a trained text pipeline
//!
//! The training job writes one JSON document per model. Field names follow
//! the vectorizer/estimator parameters they were fitted with, so a trainer
//! can dump its fitted state without reshaping it.

use crate::estimator::Estimator;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level model artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineArtifact {
    /// Model name, reported in logs
    #[serde(default = "default_name")]
    pub name: String,

    /// Model version
    #[serde(default)]
    pub version: Option<String>,

    /// Class labels, indexed like the estimator rows
    pub classes: Vec<String>,

    /// Feature extraction stage
    pub vectorizer: VectorizerSpec,

    /// Probabilistic estimator stage
    pub estimator: Estimator,
}

/// Character n-gram vectorizer parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerSpec {
    /// How n-grams are cut from the text
    #[serde(default)]
    pub analyzer: AnalyzerSpec,

    /// Inclusive `[min_n, max_n]`
    pub ngram_range: (usize, usize),

    /// Lowercase text before extraction
    #[serde(default = "default_true")]
    pub lowercase: bool,

    /// n-gram to feature column
    pub vocabulary: HashMap<String, usize>,

    /// Inverse document frequency per column (absent for raw counts)
    #[serde(default)]
    pub idf: Option<Vec<f64>>,

    /// Replace term count `c` by `1 + ln(c)`
    #[serde(default)]
    pub sublinear_tf: bool,

    /// Row normalization
    #[serde(default)]
    pub norm: NormSpec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzerSpec {
    /// n-grams over the whole text, spanning word boundaries
    #[default]
    Char,
    /// n-grams inside space-padded words only
    CharWb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NormSpec {
    #[default]
    L2,
    L1,
    None,
}

/// Probability mapping for linear estimators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MultiClassSpec {
    /// Softmax over all decision values
    #[default]
    Multinomial,
    /// Independent sigmoids, renormalized
    Ovr,
}

fn default_name() -> String {
    "text-pipeline".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_artifact_defaults() {
        let json = r#"{
            "classes": ["en", "python"],
            "vectorizer": {
                "ngram_range": [1, 2],
                "vocabulary": {"a": 0, "b": 1}
            },
            "estimator": {
                "type": "multinomial_nb",
                "class_log_prior": [-0.69, -0.69],
                "feature_log_prob": [[-0.5, -1.0], [-1.0, -0.5]]
            }
        }"#;

        let artifact: PipelineArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(artifact.name, "text-pipeline");
        assert_eq!(artifact.version, None);
        assert_eq!(artifact.vectorizer.analyzer, AnalyzerSpec::Char);
        assert_eq!(artifact.vectorizer.norm, NormSpec::L2);
        assert!(artifact.vectorizer.lowercase);
        assert!(!artifact.vectorizer.sublinear_tf);
        assert!(artifact.vectorizer.idf.is_none());
    }

    #[test]
    fn test_enum_spellings() {
        assert_eq!(
            serde_json::from_str::<AnalyzerSpec>(r#""char_wb""#).unwrap(),
            AnalyzerSpec::CharWb
        );
        assert_eq!(
            serde_json::from_str::<NormSpec>(r#""none""#).unwrap(),
            NormSpec::None
        );
        assert_eq!(
            serde_json::from_str::<MultiClassSpec>(r#""ovr""#).unwrap(),
            MultiClassSpec::Ovr
        );
    }
}
