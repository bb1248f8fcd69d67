//! HTTP error mapping

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use langid_core::ErrorBody;
use tracing::{error, warn};

/// Errors a request can end in
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Text cannot be empty.")]
    EmptyText,

    #[error("{0}")]
    InvalidBody(String),

    #[error("Model not loaded on server.")]
    ModelNotLoaded,

    /// Inference failed; the cause is logged, never sent to the caller
    #[error("Internal error while processing prediction.")]
    Inference(#[source] langid_core::Error),

    #[error("Not Found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmptyText => StatusCode::BAD_REQUEST,
            Self::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ModelNotLoaded | Self::Inference(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::EmptyText => "empty_text",
            Self::InvalidBody(_) => "invalid_body",
            Self::ModelNotLoaded => "model_not_loaded",
            Self::Inference(_) => "inference",
            Self::NotFound => "not_found",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Inference(cause) => error!("Error in prediction: {}", cause),
            Self::ModelNotLoaded => warn!("Detection requested but no model is loaded"),
            _ => {}
        }
        metrics::counter!("langid_errors_total", "type" => self.kind()).increment(1);

        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::EmptyText.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidBody("x".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::ModelNotLoaded.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_inference_message_hides_cause() {
        let err = ApiError::Inference(langid_core::Error::classifier("weights file truncated"));
        assert_eq!(err.to_string(), "Internal error while processing prediction.");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
