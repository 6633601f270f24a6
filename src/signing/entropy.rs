// Nonce and clock sources for request signing
// Author: kelexine (https://github.com/kelexine)

use crate::error::{Result, TranslateError};
use ring::rand::{SecureRandom, SystemRandom};
use uuid::Builder;

/// Source of single-use random values.
pub trait NonceSource: Send + Sync {
    /// UUID-v4 style string (Baidu `salt`, Youdao `salt`).
    fn uuid_nonce(&self) -> Result<String>;

    /// Random positive integer (Tencent `Nonce`).
    fn integer_nonce(&self) -> Result<u32>;
}

/// Source of the current Unix time in seconds.
pub trait Clock: Send + Sync {
    fn unix_seconds(&self) -> Result<u64>;
}

/// Borrowed view over the entropy sources for one signing pass.
#[derive(Clone, Copy)]
pub struct SigningContext<'a> {
    pub nonces: &'a dyn NonceSource,
    pub clock: &'a dyn Clock,
}

impl<'a> SigningContext<'a> {
    pub fn new(nonces: &'a dyn NonceSource, clock: &'a dyn Clock) -> Self {
        Self { nonces, clock }
    }
}

/// Nonces drawn from the operating system CSPRNG.
#[derive(Debug)]
pub struct SystemNonceSource {
    rng: SystemRandom,
}

impl Default for SystemNonceSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemNonceSource {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }

    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        self.rng
            .fill(dest)
            .map_err(|_| TranslateError::SigningFailure("system random source unavailable".to_string()))
    }
}

impl NonceSource for SystemNonceSource {
    fn uuid_nonce(&self) -> Result<String> {
        let mut bytes = [0u8; 16];
        self.fill(&mut bytes)?;
        Ok(Builder::from_random_bytes(bytes).into_uuid().to_string())
    }

    fn integer_nonce(&self) -> Result<u32> {
        let mut bytes = [0u8; 4];
        self.fill(&mut bytes)?;
        // 1..=i32::MAX, the API treats Nonce as a positive integer
        Ok(u32::from_be_bytes(bytes) % (i32::MAX as u32) + 1)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> Result<u64> {
        let now = chrono::Utc::now().timestamp();
        u64::try_from(now).map_err(|_| {
            TranslateError::SigningFailure(format!("system clock is before the Unix epoch ({})", now))
        })
    }
}
