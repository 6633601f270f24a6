// HTTP middleware
// Author: kelexine (https://github.com/kelexine)

use crate::utils::logging::sanitize;
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tracing::info;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Create request ID layers for the application
pub fn request_id_layers() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    (
        SetRequestIdLayer::x_request_id(MakeRequestUuid),
        PropagateRequestIdLayer::x_request_id(),
    )
}

/// One access-log line per gateway request, tagged with the request ID.
pub async fn access_log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = sanitize(&request.uri().to_string());
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let started = Instant::now();
    let response = next.run(request).await;

    info!(
        request_id = %request_id,
        "{} {} -> {} in {:?}",
        method,
        uri,
        response.status().as_u16(),
        started.elapsed()
    );

    response
}
