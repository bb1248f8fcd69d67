//! langid Classifiers
//!
//! Language identification classifiers served by langid.
//!
//! The production classifier is a [`TextPipeline`]: a character n-gram
//! vectorizer followed by a probabilistic estimator, trained elsewhere and
//! shipped as a JSON artifact. Anything else implementing [`Classifier`]
//! can be injected in its place.

pub mod artifact;
pub mod classifier;
pub mod estimator;
pub mod loader;
pub mod pipeline;
pub mod vectorizer;

pub use artifact::{AnalyzerSpec, MultiClassSpec, NormSpec, PipelineArtifact, VectorizerSpec};
pub use classifier::{ClassificationResult, Classifier};
pub use estimator::Estimator;
pub use loader::{load_classifier, load_pipeline, try_load_classifier};
pub use pipeline::TextPipeline;
pub use vectorizer::{CharNgramVectorizer, SparseVector};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{ClassificationResult, Classifier};
    pub use crate::loader::{load_classifier, try_load_classifier};
    pub use crate::pipeline::TextPipeline;
}
