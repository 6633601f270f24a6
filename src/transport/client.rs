// reqwest-backed transport
// Author: kelexine (https://github.com/kelexine)

use super::{OutboundRequest, RawResponse, Transport};
use crate::config::HttpConfig;
use crate::error::{Result, TranslateError};
use crate::providers::Method;
use crate::utils::logging::sanitize;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Pooled HTTP client shared by all provider calls.
///
/// Holds no per-request state; every call carries its own URL, body and
/// timeout.
#[derive(Clone)]
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .build()
            .map_err(|e| TranslateError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created HTTP client with connection pooling");

        Ok(Self { http_client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: OutboundRequest) -> Result<RawResponse> {
        debug!("{} {}", request.method.as_str(), sanitize(&request.url));

        let mut builder = match request.method {
            Method::Get => self.http_client.get(&request.url),
            Method::Post => self.http_client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|e| {
            error!("Provider request failed: {}", sanitize(&e.to_string()));
            if e.is_timeout() {
                TranslateError::Transport(format!("request timed out: {}", sanitize(&e.to_string())))
            } else {
                TranslateError::Transport(sanitize(&e.to_string()))
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TranslateError::Transport(format!("Failed to read response body: {}", e)))?;

        debug!("Provider replied HTTP {} ({} bytes)", status, body.len());

        Ok(RawResponse { status, body })
    }
}
