//! Structured logging and secret-scrubbing trace utilities.
//!
//! This module configures the `tracing` ecosystem for the application,
//! supporting multiple output formats and keeping request signatures and
//! credential identifiers out of log sinks.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::Result;
use regex::Regex;
use std::sync::OnceLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Lazily initialized regex for signed query/form fields
static SECRET_PARAM_REGEX: OnceLock<Regex> = OnceLock::new();

fn secret_param_regex() -> &'static Regex {
    SECRET_PARAM_REGEX.get_or_init(|| {
        Regex::new(r"\b(sign|Signature|SecretId)=[^&\s]*").expect("Invalid regex pattern")
    })
}

/// Initializes the global tracing subscriber for the application.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    // Configure filter from environment or config file
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

/// Redacts signature and secret-id values from a URL, form body or error
/// message before it is logged.
///
/// `sign=...`, `Signature=...` and `SecretId=...` keep their key and lose
/// their value, up to the next `&` or whitespace.
pub fn sanitize(input: &str) -> String {
    secret_param_regex()
        .replace_all(input, "$1=[REDACTED]")
        .into_owned()
}
