// Query-string and form-body encoding for signed parameters
// Author: kelexine (https://github.com/kelexine)

use super::CanonicalParams;
use urlencoding::encode;

/// Appends `params` to `endpoint` as a query string, in canonical order.
///
/// Every key and value is percent-encoded, so free text and base64
/// signatures (`+`, `/`, `=`) survive the trip and re-parse exactly.
pub fn build_get(endpoint: &str, params: &CanonicalParams) -> String {
    let query = encode_pairs(params);
    if query.is_empty() {
        return endpoint.to_string();
    }
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{}{}{}", endpoint, separator, query)
}

/// `application/x-www-form-urlencoded` body for `params`.
///
/// Values are encoded exactly once here; callers must hand over raw values.
/// A pre-encoded signature would reach the provider still encoded and fail
/// verification.
pub fn build_post(params: &CanonicalParams) -> String {
    encode_pairs(params)
}

fn encode_pairs(params: &CanonicalParams) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_pairs(encoded: &str) -> Vec<(String, String)> {
        encoded
            .split('&')
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap();
                (
                    urlencoding::decode(k).unwrap().into_owned(),
                    urlencoding::decode(v).unwrap().into_owned(),
                )
            })
            .collect()
    }

    fn sample() -> CanonicalParams {
        CanonicalParams::new()
            .with("q", "a&b=c d/é+")
            .with("Signature", "EfB9sAG/+Ipny4R/wWI3qrfkOgE=")
            .with("salt", "0b6f1c5e-9a7e-4c3d-8f2a-1d2e3f4a5b6c")
    }

    #[test]
    fn test_build_get_round_trip() {
        let params = sample();
        let url = build_get("https://example.com/api", &params);

        let (base, query) = url.split_once('?').unwrap();
        assert_eq!(base, "https://example.com/api");

        let expected: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(decode_pairs(query), expected);
    }

    #[test]
    fn test_build_get_escapes_signature() {
        let url = build_get("https://example.com/", &sample());
        assert!(url.contains("Signature=EfB9sAG%2F%2BIpny4R%2FwWI3qrfkOgE%3D"));
        assert!(url.contains("q=a%26b%3Dc%20d%2F%C3%A9%2B"));
    }

    #[test]
    fn test_build_get_appends_to_existing_query() {
        let params = CanonicalParams::new().with("a", "1");
        assert_eq!(build_get("http://h/p?x=y", &params), "http://h/p?x=y&a=1");
    }

    #[test]
    fn test_build_post_encodes_once() {
        let body = build_post(&sample());
        let decoded = decode_pairs(&body);

        // One decode yields the raw signature, no %25 double-escapes anywhere
        assert_eq!(decoded[1].1, "EfB9sAG/+Ipny4R/wWI3qrfkOgE=");
        assert!(!body.contains("%25"));
    }
}
