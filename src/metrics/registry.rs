// Prometheus metrics registry and collectors
// Author: kelexine (https://github.com/kelexine)

use lazy_static::lazy_static;
use prometheus::{
    CounterVec, HistogramVec, Opts, Registry, TextEncoder, Encoder,
    register_counter_vec_with_registry, register_histogram_vec_with_registry,
};
use tracing::error;

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // GATEWAY METRICS
    // ============================================================================

    /// Translate calls by outcome
    pub static ref TRANSLATIONS_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("translations_total", "Total translate calls"),
        &["provider", "method", "outcome"], // outcome: success, error
        REGISTRY
    ).unwrap();

    // ============================================================================
    // PROVIDER METRICS
    // ============================================================================

    /// Round-trip time of the outbound provider call
    pub static ref PROVIDER_CALL_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new("provider_call_duration_seconds", "Provider call duration in seconds")
            .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["provider", "method"],
        REGISTRY
    ).unwrap();

    /// Failed translate calls by error class
    pub static ref TRANSLATION_ERRORS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("translation_errors_total", "Total translation errors"),
        &["provider", "error_type"],
        REGISTRY
    ).unwrap();
}

/// Gather all metrics and return as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        error!("Failed to encode metrics: {}", e);
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}
