//! Provider signing and invocation layer.
//!
//! Each supported translation backend implements [`ProviderClient`]: it
//! turns a [`TranslationRequest`] into a signed, ordered parameter list,
//! wraps that list into a GET or POST [`OutboundRequest`], and pulls the
//! translated string back out of the provider's response body.
//!
//! # Components
//!
//! - `params`: the ordered key/value list that gets signed and transmitted.
//! - `request`: query-string and form-body encoding.
//! - `extract`: typed parsing of the three response shapes.
//! - `baidu`, `youdao`, `tencent`: canonicalization and signing per provider.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod baidu;
pub mod extract;
pub mod params;
pub mod request;
pub mod tencent;
pub mod youdao;

pub use baidu::BaiduClient;
pub use extract::extract;
pub use params::CanonicalParams;
pub use tencent::TencentClient;
pub use youdao::YoudaoClient;

use crate::error::{Result, TranslateError};
use crate::signing::SigningContext;
use crate::transport::OutboundRequest;
use std::fmt;
use std::str::FromStr;

/// The closed set of supported translation backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Baidu,
    Youdao,
    Tencent,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Baidu, Provider::Youdao, Provider::Tencent];

    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Baidu => "baidu",
            Provider::Youdao => "youdao",
            Provider::Tencent => "tencent",
        }
    }

    /// Tencent cannot auto-detect the target language.
    pub fn requires_explicit_target(self) -> bool {
        matches!(self, Provider::Tencent)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "baidu" => Ok(Provider::Baidu),
            "youdao" => Ok(Provider::Youdao),
            "tencent" => Ok(Provider::Tencent),
            _ => Err(TranslateError::UnsupportedProvider(s.to_string())),
        }
    }
}

/// HTTP method used towards the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Uppercase wire form, as it appears in signing base strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }

    /// Lowercase form used by the gateway's own query parameters.
    pub fn label(self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Method {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "get" => Ok(Method::Get),
            "post" => Ok(Method::Post),
            _ => Err(TranslateError::UnsupportedMethod(s.to_string())),
        }
    }
}

/// A validated translation request. Language codes are passed through
/// to the provider untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    text: String,
    source_lang: String,
    target_lang: String,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(TranslateError::InvalidInput(
                "text must not be empty".to_string(),
            ));
        }

        Ok(Self {
            text,
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source_lang(&self) -> &str {
        &self.source_lang
    }

    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }

    /// Rejects language pairs the provider cannot serve, before any
    /// request is signed or sent.
    pub fn validate_for(&self, provider: Provider) -> Result<()> {
        if provider.requires_explicit_target() && self.target_lang.eq_ignore_ascii_case("auto") {
            return Err(TranslateError::InvalidInput(format!(
                "{} does not support target language 'auto', an explicit target is required",
                provider
            )));
        }
        Ok(())
    }
}

/// Uniform capability set of a provider backend.
///
/// Implementations only differ in how they canonicalize and sign; request
/// assembly and response extraction are shared.
pub trait ProviderClient: Send + Sync {
    fn provider(&self) -> Provider;

    fn endpoint(&self) -> &str;

    /// Canonical parameters with the signature already in its slot.
    /// Draws a fresh nonce (and timestamp, where used) on every call.
    fn signed_params(
        &self,
        request: &TranslationRequest,
        method: Method,
        ctx: SigningContext<'_>,
    ) -> Result<CanonicalParams>;

    fn build_get_request(
        &self,
        request: &TranslationRequest,
        ctx: SigningContext<'_>,
    ) -> Result<OutboundRequest> {
        let params = self.signed_params(request, Method::Get, ctx)?;
        Ok(OutboundRequest::get(request::build_get(self.endpoint(), &params)))
    }

    fn build_post_request(
        &self,
        request: &TranslationRequest,
        ctx: SigningContext<'_>,
    ) -> Result<OutboundRequest> {
        let params = self.signed_params(request, Method::Post, ctx)?;
        Ok(OutboundRequest::post_form(
            self.endpoint().to_string(),
            request::build_post(&params),
        ))
    }

    fn build_request(
        &self,
        method: Method,
        request: &TranslationRequest,
        ctx: SigningContext<'_>,
    ) -> Result<OutboundRequest> {
        match method {
            Method::Get => self.build_get_request(request, ctx),
            Method::Post => self.build_post_request(request, ctx),
        }
    }

    fn extract_result(&self, body: &[u8]) -> Result<String> {
        extract(body, self.provider())
    }
}
