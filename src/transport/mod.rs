//! Outbound HTTP transport.
//!
//! The signing layer only produces [`OutboundRequest`] values; sending them
//! goes through the [`Transport`] trait so the dispatcher can be exercised
//! against a mock server or an in-memory fake. [`HttpTransport`] is the
//! production implementation on top of `reqwest`.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod client;

pub use client::HttpTransport;

use crate::error::Result;
use crate::providers::Method;
use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A fully signed, transport-ready provider request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Upper bound for the whole exchange; `None` defers to the transport.
    pub timeout: Option<Duration>,
}

impl OutboundRequest {
    pub fn get(url: String) -> Self {
        Self {
            method: Method::Get,
            url,
            headers: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    pub fn post_form(url: String, body: String) -> Self {
        Self {
            method: Method::Post,
            url,
            headers: vec![("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string())],
            body: Some(body),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Status and raw body of a provider reply.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request, once. Implementations must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: OutboundRequest) -> Result<RawResponse>;
}
