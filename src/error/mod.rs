// Error types for translate-gateway
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported provider '{0}', expected one of [baidu, youdao, tencent]")]
    UnsupportedProvider(String),

    #[error("Unsupported method '{0}', expected one of [get, post]")]
    UnsupportedMethod(String),

    #[error("Missing credentials for provider {0}")]
    MissingCredentials(String),

    #[error("Signing failure: {0}")]
    SigningFailure(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Empty result: {0}")]
    EmptyResult(String),

    #[error("Provider error {code}: {message}")]
    ProviderError { code: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TranslateError {
    /// Stable machine-readable label, used in response bodies and metrics.
    pub fn error_type(&self) -> &'static str {
        match self {
            TranslateError::InvalidInput(_) => "invalid_input",
            TranslateError::UnsupportedProvider(_) => "unsupported_provider",
            TranslateError::UnsupportedMethod(_) => "unsupported_method",
            TranslateError::MissingCredentials(_) => "missing_credentials",
            TranslateError::SigningFailure(_) => "signing_failure",
            TranslateError::Transport(_) => "transport_error",
            TranslateError::UpstreamStatus { .. } => "upstream_status",
            TranslateError::MalformedResponse(_) => "malformed_response",
            TranslateError::EmptyResult(_) => "empty_result",
            TranslateError::ProviderError { .. } => "provider_error",
            TranslateError::Config(_) | TranslateError::ConfigParsing(_) => "configuration_error",
            TranslateError::Io(_) | TranslateError::Internal(_) => "internal_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            TranslateError::InvalidInput(_)
            | TranslateError::UnsupportedProvider(_)
            | TranslateError::UnsupportedMethod(_) => StatusCode::BAD_REQUEST,
            TranslateError::Transport(_)
            | TranslateError::UpstreamStatus { .. }
            | TranslateError::MalformedResponse(_)
            | TranslateError::EmptyResult(_)
            | TranslateError::ProviderError { .. } => StatusCode::BAD_GATEWAY,
            TranslateError::MissingCredentials(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Convert TranslateError to HTTP responses for Axum
impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = json!({
            "status": status.as_u16().to_string(),
            "error": self.to_string(),
            "error_type": self.error_type(),
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, TranslateError>;
