// Tencent Cloud TextTranslate response
// Author: kelexine (https://github.com/kelexine)

use serde::Deserialize;

/// Everything of interest sits under the `Response` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct TencentResponse {
    #[serde(rename = "Response", default)]
    pub response: Option<TencentResponseBody>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TencentResponseBody {
    #[serde(default)]
    pub target_text: Option<String>,

    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub target: Option<String>,

    #[serde(default)]
    pub request_id: Option<String>,

    #[serde(default)]
    pub error: Option<TencentError>,
}

/// `{"Code":"AuthFailure.SignatureFailure","Message":"..."}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TencentError {
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub message: String,
}
