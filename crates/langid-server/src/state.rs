//! Shared application state

use langid_classifiers::{load_classifier, try_load_classifier, Classifier};
use langid_core::Result;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::ServerConfig;

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,

    /// The classifier, if one loaded at startup. Never replaced afterwards.
    pub classifier: Option<Arc<dyn Classifier>>,

    /// Prometheus metrics handle for rendering
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    /// Build state around an already-constructed classifier
    pub fn new(config: ServerConfig, classifier: Option<Arc<dyn Classifier>>) -> Self {
        Self {
            config: Arc::new(config),
            classifier,
            metrics_handle: None,
        }
    }

    /// Load the model named by the configuration.
    ///
    /// With `strict_startup` a load failure is returned; otherwise it is
    /// logged and the state comes up without a classifier.
    pub fn from_config(config: ServerConfig) -> Result<Self> {
        let classifier = if config.strict_startup {
            Some(load_classifier(&config.model_path)?)
        } else {
            try_load_classifier(&config.model_path)
        };

        match &classifier {
            Some(c) => info!("Serving classifier '{}' with {} classes", c.name(), c.classes().len()),
            None => warn!("No model loaded; /detect will fail until the server is restarted with a model"),
        }

        Ok(Self::new(config, classifier))
    }

    /// Attach the Prometheus handle served on `/metrics`
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics_handle = Some(handle);
        self
    }

    pub fn model_loaded(&self) -> bool {
        self.classifier.is_some()
    }
}
