// Baidu general translation API: canonicalization and signing
// Author: kelexine (https://github.com/kelexine)

use super::{CanonicalParams, Method, Provider, ProviderClient, TranslationRequest};
use crate::config::BaiduConfig;
use crate::error::{Result, TranslateError};
use crate::signing::{md5_hex, Signature, SigningContext};
use tracing::debug;

/// Transmission order of the request fields. Signed parameter sets are
/// arranged in this order before they are encoded.
pub const FIELD_ORDER: [&str; 6] = ["from", "to", "appid", "q", "sign", "salt"];

const SIGN_FIELD: &str = "sign";

/// Unsigned parameter set for one request.
pub fn canonicalize(request: &TranslationRequest, config: &BaiduConfig, salt: &str) -> CanonicalParams {
    CanonicalParams::new()
        .with("from", request.source_lang())
        .with("to", request.target_lang())
        .with("appid", config.app_id.as_str())
        .with("q", request.text())
        .with("salt", salt)
}

/// `md5(appid + q + salt + appkey)`, lowercase hex.
///
/// A plain string concatenation, not a hash over the parameter list.
pub fn sign(params: &CanonicalParams, config: &BaiduConfig) -> Result<Signature> {
    let input = format!(
        "{}{}{}{}",
        params.require("appid")?,
        params.require("q")?,
        params.require("salt")?,
        config.app_key
    );
    Ok(md5_hex(&input))
}

pub struct BaiduClient<'a> {
    config: &'a BaiduConfig,
}

impl<'a> BaiduClient<'a> {
    pub fn new(config: &'a BaiduConfig) -> Result<Self> {
        if !config.is_configured() {
            return Err(TranslateError::MissingCredentials(Provider::Baidu.to_string()));
        }
        Ok(Self { config })
    }
}

impl ProviderClient for BaiduClient<'_> {
    fn provider(&self) -> Provider {
        Provider::Baidu
    }

    fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    fn signed_params(
        &self,
        request: &TranslationRequest,
        _method: Method,
        ctx: SigningContext<'_>,
    ) -> Result<CanonicalParams> {
        let salt = ctx.nonces.uuid_nonce()?;
        let mut params = canonicalize(request, self.config, &salt);
        let signature = sign(&params, self.config)?;
        debug!("Signed Baidu request (salt={})", salt);
        params.push(SIGN_FIELD, signature.into_inner());
        params.arrange(&FIELD_ORDER)?;
        Ok(params)
    }
}
