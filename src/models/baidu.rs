// Baidu translation API response
// Author: kelexine (https://github.com/kelexine)

use super::ErrorCode;
use serde::Deserialize;

/// Codes Baidu uses for "no error" when it does send `error_code`.
pub const SUCCESS_CODES: [&str; 2] = ["52000", "0"];

/// `{"from":"en","to":"zh","trans_result":[{"src":"hello","dst":"你好"}]}`
/// or `{"error_code":"54001","error_msg":"Invalid Sign"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct BaiduResponse {
    #[serde(default)]
    pub from: Option<String>,

    #[serde(default)]
    pub to: Option<String>,

    #[serde(default)]
    pub trans_result: Option<Vec<BaiduTranslation>>,

    #[serde(default)]
    pub error_code: Option<ErrorCode>,

    #[serde(default)]
    pub error_msg: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BaiduTranslation {
    #[serde(default)]
    pub src: Option<String>,

    #[serde(default)]
    pub dst: Option<String>,
}

impl BaiduResponse {
    /// The provider-reported error, if any.
    pub fn error(&self) -> Option<(String, String)> {
        let code = self.error_code.as_ref()?;
        if code.is_one_of(&SUCCESS_CODES) {
            return None;
        }
        let message = self
            .error_msg
            .clone()
            .unwrap_or_else(|| "unknown Baidu error".to_string());
        Some((code.to_string(), message))
    }
}
