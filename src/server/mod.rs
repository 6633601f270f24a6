//! Axum-based HTTP gateway for translate-gateway.
//!
//! This module exposes the translation core over HTTP: it applies the
//! caller-facing parameter defaults, dispatches to the [`Translator`](crate::translator::Translator)
//! and renders results and errors as JSON.
//!
//! # Components
//!
//! - `handlers`: `/translate` (GET query and POST form), `/health`, `/metrics`.
//! - `middleware`: request ID tracking.
//! - `routes`: The main router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use handlers::{HealthResponse, TranslateResponse};
pub use routes::{create_router, AppState};
