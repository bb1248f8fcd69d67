//! Vectorizer + estimator pipeline loaded from a training artifact

use crate::artifact::PipelineArtifact;
use crate::classifier::Classifier;
use crate::estimator::Estimator;
use crate::vectorizer::CharNgramVectorizer;
use async_trait::async_trait;
use langid_core::{Error, Result};
use std::collections::HashSet;

/// A trained text classification pipeline
#[derive(Debug)]
pub struct TextPipeline {
    name: String,
    version: Option<String>,
    classes: Vec<String>,
    vectorizer: CharNgramVectorizer,
    estimator: Estimator,
}

impl TextPipeline {
    /// Validate an artifact and build the runtime pipeline from it
    pub fn from_artifact(artifact: PipelineArtifact) -> Result<Self> {
        if artifact.classes.is_empty() {
            return Err(Error::model("pipeline declares no classes"));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = artifact.classes.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(Error::model(format!("duplicate class label {dup:?}")));
        }
        if let Some(i) = artifact.classes.iter().position(|c| c.is_empty()) {
            return Err(Error::model(format!("class {i} has an empty label")));
        }

        let vectorizer = CharNgramVectorizer::new(artifact.vectorizer)?;
        artifact
            .estimator
            .validate(artifact.classes.len(), vectorizer.n_features())?;

        Ok(Self {
            name: artifact.name,
            version: artifact.version,
            classes: artifact.classes,
            vectorizer,
            estimator: artifact.estimator,
        })
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Class probabilities for `text`
    pub fn probabilities(&self, text: &str) -> Vec<f64> {
        let row = self.vectorizer.transform(text);
        self.estimator.predict_proba(&row)
    }

    /// Most probable label for `text`
    pub fn label(&self, text: &str) -> Result<&str> {
        let row = self.vectorizer.transform(text);
        self.estimator
            .predict(&row)
            .and_then(|i| self.classes.get(i))
            .map(String::as_str)
            .ok_or_else(|| Error::classifier("estimator produced no class scores"))
    }
}

#[async_trait]
impl Classifier for TextPipeline {
    async fn predict(&self, text: &str) -> Result<String> {
        self.label(text).map(str::to_string)
    }

    async fn predict_proba(&self, text: &str) -> Result<Vec<f64>> {
        Ok(self.probabilities(text))
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn name(&self) -> &str {
        &self.name
    }
}
