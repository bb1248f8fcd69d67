//! Wire types for the detection API

use crate::error::{Error, Result};
use crate::language::is_code;
use serde::{Deserialize, Serialize};

/// Body of `POST /detect`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectRequest {
    pub text: String,
}

impl DetectRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Empty or whitespace-only text carries nothing to classify
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Reject requests with nothing to classify
    pub fn validate(&self) -> Result<()> {
        if self.is_blank() {
            return Err(Error::invalid_input("text is empty or whitespace only"));
        }
        Ok(())
    }
}

/// Successful detection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Predicted label
    pub language: String,

    /// Highest class probability (0.0-1.0)
    pub confidence: f64,

    /// Whether the label is a programming language
    pub is_code: bool,
}

impl Detection {
    /// Build a detection, deriving `is_code` from the label
    pub fn new(language: impl Into<String>, confidence: f64) -> Self {
        let language = language.into();
        let is_code = is_code(&language);
        Self {
            language,
            confidence,
            is_code,
        }
    }
}

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model_loaded: bool,
}

impl HealthStatus {
    pub fn running(model_loaded: bool) -> Self {
        Self {
            status: "running".to_string(),
            model_loaded,
        }
    }
}

/// Error payload returned with every non-2xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
