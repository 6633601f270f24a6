// Shared helpers for integration tests
// Author: kelexine (https://github.com/kelexine)

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;
use translate_gateway::config::{
    BaiduConfig, HttpConfig, ProvidersConfig, TencentConfig, YoudaoConfig,
};
use translate_gateway::error::Result;
use translate_gateway::signing::{Clock, NonceSource};
use translate_gateway::transport::HttpTransport;
use translate_gateway::translator::Translator;

pub const BAIDU_APP_ID: &str = "20210403000760696";
pub const BAIDU_APP_KEY: &str = "cXX2Q1PSF7HsFeArJLaR";

/// Pinned nonce and clock so signatures are reproducible.
pub struct FixedEntropy {
    pub salt: &'static str,
}

impl NonceSource for FixedEntropy {
    fn uuid_nonce(&self) -> Result<String> {
        Ok(self.salt.to_string())
    }

    fn integer_nonce(&self) -> Result<u32> {
        Ok(42)
    }
}

impl Clock for FixedEntropy {
    fn unix_seconds(&self) -> Result<u64> {
        Ok(1_700_000_000)
    }
}

/// Every provider pointed at `base_url` with test credentials.
pub fn providers(base_url: &str) -> ProvidersConfig {
    ProvidersConfig {
        baidu: BaiduConfig {
            endpoint: format!("{}/api/trans/vip/translate", base_url),
            app_id: BAIDU_APP_ID.to_string(),
            app_key: BAIDU_APP_KEY.to_string(),
        },
        youdao: YoudaoConfig {
            endpoint: format!("{}/api", base_url),
            app_id: "app123".to_string(),
            app_key: "secret".to_string(),
        },
        tencent: TencentConfig {
            endpoint: format!("{}/", base_url),
            secret_id: "AKIDtest".to_string(),
            secret_key: "keytest".to_string(),
            ..TencentConfig::default()
        },
    }
}

/// Translator over the real HTTP transport with salt `s1`, nonce 42 and
/// time 1700000000.
pub fn translator(providers: ProvidersConfig) -> Translator {
    translator_with_salt(providers, "s1")
}

pub fn translator_with_salt(providers: ProvidersConfig, salt: &'static str) -> Translator {
    let transport = HttpTransport::new(&HttpConfig::default()).unwrap();
    Translator::with_parts(
        providers,
        Arc::new(transport),
        Arc::new(FixedEntropy { salt }),
        Arc::new(FixedEntropy { salt }),
        Duration::from_secs(5),
    )
}
