// Youdao open API (signType v3): canonicalization and signing
// Author: kelexine (https://github.com/kelexine)

use super::{CanonicalParams, Method, Provider, ProviderClient, TranslationRequest};
use crate::config::YoudaoConfig;
use crate::error::{Result, TranslateError};
use crate::signing::{sha256_hex, truncate, Signature, SigningContext};
use tracing::debug;

/// Transmission order of the request fields. Signed parameter sets are
/// arranged in this order before they are encoded.
pub const FIELD_ORDER: [&str; 8] = [
    "from", "to", "signType", "curtime", "appKey", "q", "sign", "salt",
];

const SIGN_TYPE: &str = "v3";
const SIGN_FIELD: &str = "sign";

/// Unsigned parameter set for one request. `appKey` carries the
/// application id; the secret never leaves the process.
pub fn canonicalize(
    request: &TranslationRequest,
    config: &YoudaoConfig,
    salt: &str,
    curtime: u64,
) -> CanonicalParams {
    CanonicalParams::new()
        .with("from", request.source_lang())
        .with("to", request.target_lang())
        .with("signType", SIGN_TYPE)
        .with("curtime", curtime.to_string())
        .with("appKey", config.app_id.as_str())
        .with("q", request.text())
        .with("salt", salt)
}

/// `sha256(appKey + truncate(q) + salt + curtime + secret)`, lowercase hex.
///
/// Only the signature input is truncated; `q` is transmitted in full.
pub fn sign(params: &CanonicalParams, config: &YoudaoConfig) -> Result<Signature> {
    let input = format!(
        "{}{}{}{}{}",
        params.require("appKey")?,
        truncate(params.require("q")?),
        params.require("salt")?,
        params.require("curtime")?,
        config.app_key
    );
    Ok(sha256_hex(&input))
}

pub struct YoudaoClient<'a> {
    config: &'a YoudaoConfig,
}

impl<'a> YoudaoClient<'a> {
    pub fn new(config: &'a YoudaoConfig) -> Result<Self> {
        if !config.is_configured() {
            return Err(TranslateError::MissingCredentials(Provider::Youdao.to_string()));
        }
        Ok(Self { config })
    }
}

impl ProviderClient for YoudaoClient<'_> {
    fn provider(&self) -> Provider {
        Provider::Youdao
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
        let curtime = ctx.clock.unix_seconds()?;
        let mut params = canonicalize(request, self.config, &salt, curtime);
        let signature = sign(&params, self.config)?;
        debug!("Signed Youdao request (salt={}, curtime={})", salt, curtime);
        params.push(SIGN_FIELD, signature.into_inner());
        params.arrange(&FIELD_ORDER)?;
        Ok(params)
    }
}
