// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{
    health_handler, metrics_handler, translate_form_handler, translate_query_handler,
};
use super::middleware::{access_log, request_id_layers};
use crate::config::AppConfig;
use crate::translator::Translator;
use axum::{middleware::from_fn, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub translator: Arc<Translator>,
}

pub fn create_router(config: AppConfig, translator: Translator) -> Router {
    let state = AppState {
        config: Arc::new(config),
        translator: Arc::new(translator),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    Router::new()
        .route(
            "/translate",
            get(translate_query_handler).post(translate_form_handler),
        )
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        // Outermost first: the ID is assigned before tracing and access logging see the request
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id)
                .layer(TraceLayer::new_for_http())
                .layer(from_fn(access_log))
                .layer(propagate_request_id),
        )
        .with_state(state)
}
