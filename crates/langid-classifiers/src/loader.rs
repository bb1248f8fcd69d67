//! Loading pipeline artifacts from disk

use crate::artifact::PipelineArtifact;
use crate::classifier::Classifier;
use crate::pipeline::TextPipeline;
use langid_core::Result;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Read, parse and validate a pipeline artifact
pub fn load_pipeline(path: impl AsRef<Path>) -> Result<TextPipeline> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let artifact: PipelineArtifact = serde_json::from_reader(reader)?;
    TextPipeline::from_artifact(artifact)
}

/// Load a pipeline artifact as a shareable classifier
pub fn load_classifier(path: impl AsRef<Path>) -> Result<Arc<dyn Classifier>> {
    let path = path.as_ref();
    info!("Loading model from: {}", path.display());

    let pipeline = load_pipeline(path)?;
    info!(
        model = pipeline.name(),
        version = pipeline.version().unwrap_or("unversioned"),
        classes = pipeline.classes().len(),
        "Model loaded successfully"
    );

    Ok(Arc::new(pipeline))
}

/// Load a classifier, logging and swallowing any failure
pub fn try_load_classifier(path: impl AsRef<Path>) -> Option<Arc<dyn Classifier>> {
    let path = path.as_ref();
    match load_classifier(path) {
        Ok(classifier) => Some(classifier),
        Err(e) if e.is_not_found() => {
            warn!("Model file not found at {}", path.display());
            None
        }
        Err(e) => {
            error!("Failed to load model from {}: {}", path.display(), e);
            None
        }
    }
}
