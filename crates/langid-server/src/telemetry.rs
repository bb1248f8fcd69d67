//! Prometheus metrics for the detection service

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;

/// Install the global Prometheus recorder and describe the service metrics
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "langid_requests_total",
        "Total number of requests by route"
    );
    metrics::describe_counter!(
        "langid_detections_total",
        "Successful detections by kind (code or natural)"
    );
    metrics::describe_counter!("langid_errors_total", "Total number of errors by type");
    metrics::describe_histogram!(
        "langid_inference_latency_us",
        metrics::Unit::Microseconds,
        "Classifier latency in microseconds"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}

/// Record a successful detection
pub fn record_detection(is_code: bool, latency_us: u64) {
    let kind = if is_code { "code" } else { "natural" };
    metrics::counter!("langid_detections_total", "kind" => kind).increment(1);
    metrics::histogram!("langid_inference_latency_us").record(latency_us as f64);
}
