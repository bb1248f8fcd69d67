//! Classifier trait and common types

use async_trait::async_trait;
use langid_core::{Error, Result};
use std::time::Instant;

/// Trait for all language classifiers
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Predict the most likely label for the given text
    async fn predict(&self, text: &str) -> Result<String>;

    /// Class probabilities for the given text, in [`Classifier::classes`] order
    async fn predict_proba(&self, text: &str) -> Result<Vec<f64>>;

    /// Labels the classifier can emit
    fn classes(&self) -> &[String];

    /// Get the classifier name
    fn name(&self) -> &str;

    /// Predict a label and attach the highest class probability as its score.
    ///
    /// The label comes from `predict` and the score from `predict_proba`; the
    /// two are not cross-checked.
    async fn classify(&self, text: &str) -> Result<ClassificationResult> {
        let start = Instant::now();

        let label = self.predict(text).await?;
        if label.is_empty() {
            return Err(Error::classifier("classifier predicted an empty label"));
        }
        let probabilities = self.predict_proba(text).await?;
        let score = max_probability(&probabilities)?;

        let all_scores = self
            .classes()
            .iter()
            .cloned()
            .zip(probabilities)
            .collect();

        Ok(ClassificationResult {
            label,
            score,
            all_scores,
            latency_us: start.elapsed().as_micros() as u64,
        })
    }
}

/// Result of classification
#[derive(Debug, Clone)]
pub struct ClassificationResult {
    /// Predicted label
    pub label: String,

    /// Confidence score (0.0-1.0)
    pub score: f64,

    /// All class scores, in class order
    pub all_scores: Vec<(String, f64)>,

    /// Latency in microseconds
    pub latency_us: u64,
}

impl ClassificationResult {
    /// Create a new classification result
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
            all_scores: Vec::new(),
            latency_us: 0,
        }
    }

    /// The `k` highest-scoring classes, best first
    pub fn top_k(&self, k: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .all_scores
            .iter()
            .map(|(label, score)| (label.as_str(), *score))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(k);
        ranked
    }
}

/// Largest entry of a probability vector, clamped into [0, 1]
pub(crate) fn max_probability(probabilities: &[f64]) -> Result<f64> {
    if probabilities.is_empty() {
        return Err(Error::classifier("classifier returned no probabilities"));
    }
    if let Some(bad) = probabilities.iter().find(|p| !p.is_finite()) {
        return Err(Error::classifier(format!(
            "classifier returned a non-finite probability: {bad}"
        )));
    }

    let max = probabilities
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    Ok(max.clamp(0.0, 1.0))
}
