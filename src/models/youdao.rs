// Youdao open API response
// Author: kelexine (https://github.com/kelexine)

use super::ErrorCode;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Youdao does not send an error message, only `errorCode`.
static ERROR_MESSAGES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn error_messages() -> &'static HashMap<&'static str, &'static str> {
    ERROR_MESSAGES.get_or_init(|| {
        let mut m = HashMap::new();
        m.insert("101", "missing required parameter");
        m.insert("102", "unsupported language type");
        m.insert("103", "translation text too long");
        m.insert("108", "invalid application id");
        m.insert("110", "no service instance bound to the application");
        m.insert("111", "invalid developer account");
        m.insert("113", "q must not be empty");
        m.insert("202", "signature verification failed");
        m.insert("206", "invalid timestamp");
        m.insert("207", "replayed request");
        m.insert("401", "account overdue");
        m.insert("411", "access frequency limited");
        m
    })
}

/// `{"errorCode":"0","query":"hello","translation":["你好"],"l":"en2zh-CHS"}`.
/// Dictionary fields (`basic`, `web`, `dict`, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoudaoResponse {
    #[serde(default)]
    pub error_code: Option<ErrorCode>,

    #[serde(default)]
    pub query: Option<String>,

    #[serde(default)]
    pub translation: Option<Vec<String>>,

    #[serde(default)]
    pub l: Option<String>,

    #[serde(default)]
    pub return_phrase: Option<Vec<String>>,
}

impl YoudaoResponse {
    /// The provider-reported error, if any. A missing `errorCode` is
    /// treated as success and left to the result check.
    pub fn error(&self) -> Option<(String, String)> {
        let code = self.error_code.as_ref()?;
        if code.is_one_of(&["0"]) {
            return None;
        }
        let code = code.to_string();
        let message = error_messages()
            .get(code.as_str())
            .map(|m| m.to_string())
            .unwrap_or_else(|| format!("Youdao error code {}", code));
        Some((code, message))
    }
}
