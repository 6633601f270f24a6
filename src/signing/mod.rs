//! Digest primitives and entropy sources used by the provider signers.
//!
//! The provider modules decide *what* gets signed; this module only knows
//! *how* to hash it. Every function here is pure except for the
//! [`entropy`] sources, which are injectable so signatures can be pinned in
//! tests.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod entropy;

pub use entropy::{Clock, NonceSource, SigningContext, SystemClock, SystemNonceSource};

use crate::error::{Result, TranslateError};
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use ring::hmac;
use sha2::{Digest, Sha256};
use std::fmt;

/// Authentication token attached to an outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(String);

impl Signature {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercase hex MD5 digest.
pub fn md5_hex(input: &str) -> Signature {
    Signature(format!("{:x}", md5::compute(input.as_bytes())))
}

/// Lowercase hex SHA-256 digest.
pub fn sha256_hex(input: &str) -> Signature {
    Signature(hex::encode(Sha256::digest(input.as_bytes())))
}

/// HMAC-SHA1 of `message` keyed by `key`, standard padded base64.
pub fn hmac_sha1_base64(key: &str, message: &str) -> Result<Signature> {
    if key.is_empty() {
        return Err(TranslateError::SigningFailure(
            "HMAC key must not be empty".to_string(),
        ));
    }
    let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, key.as_bytes());
    let tag = hmac::sign(&key, message.as_bytes());
    Ok(Signature(BASE64_STANDARD.encode(tag.as_ref())))
}

/// Shortens `q` for the Youdao v3 signature input.
///
/// Counts Unicode scalar values, not bytes. Up to 20 scalars the input is
/// returned unchanged; longer input becomes the first 10 scalars, the total
/// scalar count in decimal, then the last 10 scalars.
pub fn truncate(q: &str) -> String {
    let chars: Vec<char> = q.chars().collect();
    let size = chars.len();
    if size <= 20 {
        return q.to_string();
    }

    let mut out = String::with_capacity(q.len());
    out.extend(&chars[..10]);
    out.push_str(&size.to_string());
    out.extend(&chars[size - 10..]);
    out
}
