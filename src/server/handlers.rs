// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::TranslateError;
use crate::providers::{Method, Provider};
use crate::translator::is_configured;
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Multipart, Query, Request, State},
    http::{header, request::Parts},
    response::IntoResponse,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, warn};

/// Caller-facing parameters, shared by the query-string and form variants.
#[derive(Debug, Deserialize)]
pub struct TranslateParams {
    #[serde(default)]
    pub text: String,

    #[serde(default = "default_lang")]
    pub from: String,

    #[serde(default = "default_lang")]
    pub to: String,

    #[serde(default = "default_api")]
    pub api: String,

    #[serde(default = "default_method")]
    pub method: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub status: String,
    pub api: String,
    #[serde(rename = "called method")]
    pub called_method: String,
    pub src: String,
    pub dst: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub providers: HashMap<String, bool>,
    pub timeout_seconds: u64,
    pub timestamp: String,
}

impl Default for TranslateParams {
    fn default() -> Self {
        Self {
            text: String::new(),
            from: default_lang(),
            to: default_lang(),
            api: default_api(),
            method: default_method(),
        }
    }
}

impl TranslateParams {
    /// Collects the known text fields of a multipart form; other fields are ignored.
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, TranslateError> {
        let mut params = Self::default();
        while let Some(field) = multipart.next_field().await.map_err(bad_form)? {
            let name = field.name().unwrap_or_default().to_string();
            let value = field.text().await.map_err(bad_form)?;
            match name.as_str() {
                "text" => params.text = value,
                "from" => params.from = value,
                "to" => params.to = value,
                "api" => params.api = value,
                "method" => params.method = value,
                _ => {}
            }
        }
        Ok(params)
    }
}

/// Query-string parameters; malformed queries are rejected as `InvalidInput`.
pub struct TranslateQuery(pub TranslateParams);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for TranslateQuery {
    type Rejection = TranslateError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<TranslateParams>::from_request_parts(parts, state)
            .await
            .map_err(bad_form)?;
        Ok(Self(params))
    }
}

/// Form parameters from an `application/x-www-form-urlencoded` or
/// `multipart/form-data` body. Any other body is rejected as `InvalidInput`.
pub struct TranslateForm(pub TranslateParams);

#[async_trait]
impl<S: Send + Sync> FromRequest<S> for TranslateForm {
    type Rejection = TranslateError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state).await.map_err(bad_form)?;
            return TranslateParams::from_multipart(multipart).await.map(Self);
        }

        let Form(params) = Form::<TranslateParams>::from_request(req, state)
            .await
            .map_err(bad_form)?;
        Ok(Self(params))
    }
}

fn bad_form(e: impl std::fmt::Display) -> TranslateError {
    TranslateError::InvalidInput(format!("unreadable request parameters: {}", e))
}

fn default_lang() -> String {
    "auto".to_string()
}

fn default_api() -> String {
    "youdao".to_string()
}

fn default_method() -> String {
    "post".to_string()
}

/// Handler for `GET /translate` (query string)
pub async fn translate_query_handler(
    State(state): State<AppState>,
    TranslateQuery(params): TranslateQuery,
) -> Result<Json<TranslateResponse>, TranslateError> {
    translate(state, params).await
}

/// Handler for `POST /translate` (urlencoded or multipart form body)
pub async fn translate_form_handler(
    State(state): State<AppState>,
    TranslateForm(params): TranslateForm,
) -> Result<Json<TranslateResponse>, TranslateError> {
    translate(state, params).await
}

async fn translate(
    state: AppState,
    params: TranslateParams,
) -> Result<Json<TranslateResponse>, TranslateError> {
    if params.text.is_empty() {
        return Err(TranslateError::InvalidInput(
            "parameter 'text' is required".to_string(),
        ));
    }
    let provider: Provider = params.api.parse()?;
    let method: Method = params.method.parse()?;

    info!(
        "Translate request: api={}, method={}, from={}, to={}, chars={}",
        provider,
        method,
        params.from,
        params.to,
        params.text.chars().count()
    );

    let dst = state
        .translator
        .translate(provider, method, &params.text, &params.from, &params.to)
        .await
        .map_err(|e| {
            warn!("Translate via {} failed: {}", provider, e);
            e
        })?;

    Ok(Json(TranslateResponse {
        status: "200".to_string(),
        api: provider.to_string(),
        called_method: method.to_string(),
        src: params.text,
        dst,
    }))
}

/// Handler for `GET /health`
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let providers: HashMap<String, bool> = Provider::ALL
        .iter()
        .map(|p| (p.to_string(), is_configured(state.translator.providers(), *p)))
        .collect();

    let status = if providers.values().any(|configured| *configured) {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        providers,
        timeout_seconds: state.config.http.timeout_seconds,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Handler for `GET /metrics` (Prometheus text exposition)
pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        crate::metrics::gather_metrics(),
    )
}
