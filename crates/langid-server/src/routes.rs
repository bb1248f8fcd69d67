//! HTTP routes and handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use langid_core::{DetectRequest, Detection, HealthStatus};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::config::CorsConfig;
use crate::error::ApiError;
use crate::state::AppState;
use crate::telemetry;

/// Build the Axum application
pub fn build_app(state: AppState) -> langid_core::Result<Router> {
    let cors = cors_layer(&state.config.cors)?;

    Ok(Router::new()
        .route("/", get(health_check))
        .route("/detect", post(detect))
        .route("/metrics", get(render_metrics))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}

/// Fixed origin list; methods and headers are mirrored from the request since
/// credentials rule out the `*` wildcard.
fn cors_layer(config: &CorsConfig) -> langid_core::Result<CorsLayer> {
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.origin_values()?))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(config.allow_credentials))
}

async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    metrics::counter!("langid_requests_total", "route" => "health").increment(1);
    Json(HealthStatus::running(state.model_loaded()))
}

async fn detect(
    State(state): State<AppState>,
    payload: Result<Json<DetectRequest>, JsonRejection>,
) -> Result<Json<Detection>, ApiError> {
    metrics::counter!("langid_requests_total", "route" => "detect").increment(1);

    let Json(request) = payload?;
    request.validate().map_err(|_| ApiError::EmptyText)?;

    let classifier = state.classifier.as_ref().ok_or(ApiError::ModelNotLoaded)?;
    let result = classifier
        .classify(&request.text)
        .await
        .map_err(ApiError::Inference)?;

    let detection = Detection::new(result.label, result.score);
    telemetry::record_detection(detection.is_code, result.latency_us);
    debug!(
        language = %detection.language,
        confidence = detection.confidence,
        is_code = detection.is_code,
        latency_us = result.latency_us,
        "Detection complete"
    );

    Ok(Json(detection))
}

async fn render_metrics(State(state): State<AppState>) -> String {
    state
        .metrics_handle
        .as_ref()
        .map(|handle| handle.render())
        .unwrap_or_default()
}

async fn fallback() -> ApiError {
    ApiError::NotFound
}
