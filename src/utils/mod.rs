//! Utility functions and helpers for translate-gateway.
//!
//! # Submodules
//!
//! - `logging`: Tracing initialization and secret scrubbing for log lines.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
