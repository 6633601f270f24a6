// Ordered request parameters
// Author: kelexine (https://github.com/kelexine)

use crate::error::{Result, TranslateError};

/// Ordered `(key, value)` list that is both signed and transmitted.
///
/// Order is significant: it is the transmission order for every provider,
/// and the signers that hash parameter lists rely on it being stable.
/// Keys are static field names declared by each provider module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalParams {
    pairs: Vec<(&'static str, String)>,
}

impl CanonicalParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.pairs.push((key, value.into()));
    }

    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Like [`get`](Self::get), for values a signer cannot do without.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| {
            TranslateError::SigningFailure(format!("parameter '{}' missing from canonical set", key))
        })
    }

    /// Reorders the pairs to follow `order`, the provider's declared field
    /// order. A key with no declared position is a signing failure.
    pub fn arrange(&mut self, order: &[&str]) -> Result<()> {
        if let Some((key, _)) = self.pairs.iter().find(|(k, _)| !order.contains(k)) {
            return Err(TranslateError::SigningFailure(format!(
                "parameter '{}' has no declared position",
                key
            )));
        }
        self.pairs
            .sort_by_key(|(k, _)| order.iter().position(|o| o == k));
        Ok(())
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
