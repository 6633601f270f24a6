// Tencent Cloud TextTranslate (HmacSHA1 signature v1): canonicalization and signing
// Author: kelexine (https://github.com/kelexine)

use super::{CanonicalParams, Method, Provider, ProviderClient, TranslationRequest};
use crate::config::TencentConfig;
use crate::error::{Result, TranslateError};
use crate::signing::{hmac_sha1_base64, Signature, SigningContext};
use tracing::{debug, trace};

/// Transmission order of the request fields. Signed parameter sets are
/// arranged in this order before they are encoded.
pub const FIELD_ORDER: [&str; 11] = [
    "Action",
    "Region",
    "Timestamp",
    "Nonce",
    "SecretId",
    "Signature",
    "Version",
    "SourceText",
    "Source",
    "Target",
    "ProjectId",
];

pub const SIGNATURE_FIELD: &str = "Signature";

const ACTION: &str = "TextTranslate";
const VERSION: &str = "2018-03-21";
const PROJECT_ID: &str = "0";

/// Unsigned parameter set for one request.
pub fn canonicalize(
    request: &TranslationRequest,
    config: &TencentConfig,
    nonce: u32,
    timestamp: u64,
) -> CanonicalParams {
    CanonicalParams::new()
        .with("Action", ACTION)
        .with("Region", config.region.as_str())
        .with("Timestamp", timestamp.to_string())
        .with("Nonce", nonce.to_string())
        .with("SecretId", config.secret_id.as_str())
        .with("Version", VERSION)
        .with("SourceText", request.text())
        .with("Source", request.source_lang())
        .with("Target", request.target_lang())
        .with("ProjectId", PROJECT_ID)
}

/// `k=v&k=v...` over every field except `Signature`, keys sorted
/// byte-wise, values raw. Independent of the order fields were added in.
pub fn canonical_query_string(params: &CanonicalParams) -> String {
    let mut pairs: Vec<(&str, &str)> = params
        .iter()
        .filter(|(key, _)| *key != SIGNATURE_FIELD)
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// `<METHOD><host>/?<canonical query>`, e.g. `POSTtmt.tencentcloudapi.com/?Action=...`.
pub fn signing_base_string(method: Method, host: &str, params: &CanonicalParams) -> String {
    format!("{}{}/?{}", method.as_str(), host, canonical_query_string(params))
}

/// Base64 HMAC-SHA1 of the signing base string, keyed by the secret key.
/// `method` must be the method the request is actually sent with.
pub fn sign(params: &CanonicalParams, method: Method, config: &TencentConfig) -> Result<Signature> {
    let base = signing_base_string(method, &config.sign_host, params);
    trace!("Tencent signing base string: {}", base);
    hmac_sha1_base64(&config.secret_key, &base)
}

pub struct TencentClient<'a> {
    config: &'a TencentConfig,
}

impl<'a> TencentClient<'a> {
    pub fn new(config: &'a TencentConfig) -> Result<Self> {
        if !config.is_configured() {
            return Err(TranslateError::MissingCredentials(Provider::Tencent.to_string()));
        }
        Ok(Self { config })
    }
}

impl ProviderClient for TencentClient<'_> {
    fn provider(&self) -> Provider {
        Provider::Tencent
    }

    fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    fn signed_params(
        &self,
        request: &TranslationRequest,
        method: Method,
        ctx: SigningContext<'_>,
    ) -> Result<CanonicalParams> {
        let nonce = ctx.nonces.integer_nonce()?;
        let timestamp = ctx.clock.unix_seconds()?;
        let mut params = canonicalize(request, self.config, nonce, timestamp);
        let signature = sign(&params, method, self.config)?;
        debug!("Signed Tencent {} request (nonce={}, timestamp={})", method.as_str(), nonce, timestamp);
        params.push(SIGNATURE_FIELD, signature.into_inner());
        params.arrange(&FIELD_ORDER)?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signing::entropy::fixed::FixedEntropy;

    fn config() -> TencentConfig {
        TencentConfig {
            secret_id: "AKIDtest".to_string(),
            secret_key: "keytest".to_string(),
            ..TencentConfig::default()
        }
    }

    fn request() -> TranslationRequest {
        TranslationRequest::new("hello", "en", "zh").unwrap()
    }

    const EXPECTED_QUERY: &str = "Action=TextTranslate&Nonce=42&ProjectId=0&Region=ap-guangzhou\
        &SecretId=AKIDtest&Source=en&SourceText=hello&Target=zh&Timestamp=1700000000&Version=2018-03-21";

    #[test]
    fn test_canonical_query_is_sorted() {
        let params = canonicalize(&request(), &config(), 42, 1_700_000_000);
        assert_eq!(canonical_query_string(&params), EXPECTED_QUERY);
    }

    #[test]
    fn test_canonical_query_independent_of_insertion_order() {
        let forward = canonicalize(&request(), &config(), 42, 1_700_000_000);

        let mut reversed = CanonicalParams::new();
        let pairs: Vec<_> = forward.iter().collect();
        for (k, v) in pairs.into_iter().rev() {
            reversed.push(k, v);
        }

        assert_eq!(canonical_query_string(&forward), canonical_query_string(&reversed));
    }

    #[test]
    fn test_canonical_query_excludes_signature() {
        let mut params = canonicalize(&request(), &config(), 42, 1_700_000_000);
        let before = canonical_query_string(&params);
        params.push(SIGNATURE_FIELD, "whatever");

        let after = canonical_query_string(&params);
        assert_eq!(before, after);
        assert!(!after.contains("Signature="));
    }

    #[test]
    fn test_base_string_differs_only_in_method() {
        let params = canonicalize(&request(), &config(), 42, 1_700_000_000);
        let post = signing_base_string(Method::Post, "tmt.tencentcloudapi.com", &params);
        let get = signing_base_string(Method::Get, "tmt.tencentcloudapi.com", &params);

        assert_eq!(post, format!("POSTtmt.tencentcloudapi.com/?{}", EXPECTED_QUERY));
        assert_eq!(get, format!("GETtmt.tencentcloudapi.com/?{}", EXPECTED_QUERY));
    }

    #[test]
    fn test_sign_known_vectors() {
        let params = canonicalize(&request(), &config(), 42, 1_700_000_000);
        assert_eq!(
            sign(&params, Method::Post, &config()).unwrap().as_str(),
            "/qbHDqTZwAWE10G/bf2dHPxDgPY="
        );
        assert_eq!(
            sign(&params, Method::Get, &config()).unwrap().as_str(),
            "EfB9sAG/+Ipny4R/wWI3qrfkOgE="
        );
    }

    #[test]
    fn test_sign_host_independent_of_endpoint() {
        let redirected = TencentConfig {
            endpoint: "http://127.0.0.1:9999/".to_string(),
            ..config()
        };
        let params = canonicalize(&request(), &redirected, 42, 1_700_000_000);
        assert_eq!(
            sign(&params, Method::Post, &redirected).unwrap().as_str(),
            "/qbHDqTZwAWE10G/bf2dHPxDgPY="
        );
    }

    #[test]
    fn test_signed_params_layout_and_get_encoding() {
        let entropy = FixedEntropy::new("unused", 42, 1_700_000_000);
        let cfg = config();
        let client = TencentClient::new(&cfg).unwrap();

        let params = client
            .signed_params(&request(), Method::Get, SigningContext::new(&entropy, &entropy))
            .unwrap();
        assert_eq!(params.keys().collect::<Vec<_>>(), FIELD_ORDER.to_vec());
        assert_eq!(params.get("Signature"), Some("EfB9sAG/+Ipny4R/wWI3qrfkOgE="));

        let outbound = client
            .build_get_request(&request(), SigningContext::new(&entropy, &entropy))
            .unwrap();
        assert!(outbound
            .url
            .contains("&Signature=EfB9sAG%2F%2BIpny4R%2FwWI3qrfkOgE%3D&Version="));
    }

    #[test]
    fn test_post_body_carries_post_signature() {
        let entropy = FixedEntropy::new("unused", 42, 1_700_000_000);
        let cfg = config();
        let client = TencentClient::new(&cfg).unwrap();

        let outbound = client
            .build_post_request(&request(), SigningContext::new(&entropy, &entropy))
            .unwrap();
        let body = outbound.body.unwrap();
        assert!(body.contains("Signature=%2FqbHDqTZwAWE10G%2Fbf2dHPxDgPY%3D"));
        assert_eq!(outbound.url, "https://tmt.tencentcloudapi.com/");
    }
}
