//! Wire models for the provider response bodies.
//!
//! One module per provider. Every field is optional; partial bodies are
//! classified by `providers::extract`.
//!
//! - `baidu`: general translation API (`trans_result`, `error_code`)
//! - `youdao`: open API v3 (`errorCode`, `translation`)
//! - `tencent`: TextTranslate (`Response.TargetText`, `Response.Error`)

// Author: kelexine (https://github.com/kelexine)

pub mod baidu;
pub mod tencent;
pub mod youdao;

pub use baidu::{BaiduResponse, BaiduTranslation};
pub use tencent::{TencentError, TencentResponse, TencentResponseBody};
pub use youdao::YoudaoResponse;

use serde::Deserialize;
use std::fmt;

/// Provider error codes arrive as JSON strings or numbers depending on the
/// provider (and sometimes the endpoint version).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    Text(String),
    Number(i64),
}

impl ErrorCode {
    /// True when the code equals one of the provider's success markers.
    pub fn is_one_of(&self, success: &[&str]) -> bool {
        let code = self.to_string();
        success.iter().any(|s| *s == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Text(s) => f.write_str(s),
            ErrorCode::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A parsed provider body, tagged by the provider that produced it.
#[derive(Debug, Clone)]
pub enum ProviderResponse {
    Baidu(BaiduResponse),
    Youdao(YoudaoResponse),
    Tencent(TencentResponse),
}
