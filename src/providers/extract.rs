// Response extraction (provider body → translated text)
// Author: kelexine (https://github.com/kelexine)

use super::Provider;
use crate::error::{Result, TranslateError};
use crate::models::{BaiduResponse, ProviderResponse, TencentResponse, YoudaoResponse};
use tracing::{debug, warn};

/// Parse `body` as the response shape of `provider` and pull out the
/// translated string.
///
/// Provider-level error indicators are checked before any result list is
/// touched; an absent, empty or blank result is `EmptyResult`.
pub fn extract(body: &[u8], provider: Provider) -> Result<String> {
    let parsed = parse(body, provider)?;
    translation(parsed)
}

/// Parse only. Fails with `MalformedResponse` when the body is not JSON of
/// the expected shape.
pub fn parse(body: &[u8], provider: Provider) -> Result<ProviderResponse> {
    let malformed = |e: serde_json::Error| {
        warn!("Failed to parse {} response: {}", provider, e);
        TranslateError::MalformedResponse(format!("{} response: {}", provider, e))
    };

    Ok(match provider {
        Provider::Baidu => ProviderResponse::Baidu(serde_json::from_slice(body).map_err(malformed)?),
        Provider::Youdao => ProviderResponse::Youdao(serde_json::from_slice(body).map_err(malformed)?),
        Provider::Tencent => {
            ProviderResponse::Tencent(serde_json::from_slice(body).map_err(malformed)?)
        }
    })
}

/// The translated string held by an already-parsed response.
pub fn translation(response: ProviderResponse) -> Result<String> {
    match response {
        ProviderResponse::Baidu(resp) => from_baidu(resp),
        ProviderResponse::Youdao(resp) => from_youdao(resp),
        ProviderResponse::Tencent(resp) => from_tencent(resp),
    }
}

fn from_baidu(resp: BaiduResponse) -> Result<String> {
    if let Some((code, message)) = resp.error() {
        return Err(TranslateError::ProviderError { code, message });
    }

    debug!("Baidu detected {:?} -> {:?}", resp.from, resp.to);

    let first = resp
        .trans_result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| TranslateError::EmptyResult("baidu returned no trans_result".to_string()))?;

    non_empty(first.dst, "baidu trans_result[0] has no dst")
}

fn from_youdao(resp: YoudaoResponse) -> Result<String> {
    if let Some((code, message)) = resp.error() {
        return Err(TranslateError::ProviderError { code, message });
    }

    let first = resp
        .translation
        .and_then(|results| results.into_iter().next());

    non_empty(first, "youdao returned no translation")
}

fn from_tencent(resp: TencentResponse) -> Result<String> {
    let body = resp.response.ok_or_else(|| {
        TranslateError::MalformedResponse("tencent response: missing Response envelope".to_string())
    })?;

    if let Some(error) = body.error {
        return Err(TranslateError::ProviderError {
            code: error.code,
            message: error.message,
        });
    }

    debug!("Tencent request id: {:?}", body.request_id);

    non_empty(body.target_text, "tencent Response has no TargetText")
}

fn non_empty(value: Option<String>, what: &str) -> Result<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(TranslateError::EmptyResult(what.to_string())),
    }
}
