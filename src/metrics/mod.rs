// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{
    gather_metrics,
    PROVIDER_CALL_DURATION,
    TRANSLATIONS_TOTAL,
    TRANSLATION_ERRORS,
};

use crate::error::TranslateError;
use crate::providers::{Method, Provider};

/// Helper to record a finished translate call
pub fn record_translation(provider: Provider, method: Method, success: bool) {
    let outcome = if success { "success" } else { "error" };
    TRANSLATIONS_TOTAL
        .with_label_values(&[provider.as_str(), method.label(), outcome])
        .inc();
}

/// Helper to record provider round-trip time
pub fn record_provider_call(provider: Provider, method: Method, duration_secs: f64) {
    PROVIDER_CALL_DURATION
        .with_label_values(&[provider.as_str(), method.label()])
        .observe(duration_secs);
}

/// Helper to record a classified failure
pub fn record_error(provider: Provider, error: &TranslateError) {
    TRANSLATION_ERRORS
        .with_label_values(&[provider.as_str(), error.error_type()])
        .inc();
}
