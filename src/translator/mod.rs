//! The single entry point of the core: pick a provider, sign, send, extract.
//!
//! A [`Translator`] only holds read-only configuration and shared handles
//! (transport pool, entropy sources). Parameters, nonces, timestamps and
//! signatures are built fresh inside every [`Translator::translate`] call,
//! so concurrent calls share nothing mutable.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::{AppConfig, ProvidersConfig};
use crate::error::{Result, TranslateError};
use crate::metrics;
use crate::providers::{
    BaiduClient, Method, Provider, ProviderClient, TencentClient, TranslationRequest, YoudaoClient,
};
use crate::signing::{Clock, NonceSource, SigningContext, SystemClock, SystemNonceSource};
use crate::transport::{HttpTransport, Transport};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Upper bound on how much of an unexpected upstream body is echoed back.
const MAX_ERROR_BODY: usize = 512;

pub struct Translator {
    providers: Arc<ProvidersConfig>,
    transport: Arc<dyn Transport>,
    nonces: Arc<dyn NonceSource>,
    clock: Arc<dyn Clock>,
    timeout: Duration,
}

impl Translator {
    /// Production wiring: pooled `reqwest` transport, OS randomness, system clock.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config.http)?;

        for provider in Provider::ALL {
            if !is_configured(&config.providers, provider) {
                warn!("No credentials configured for {}, calls to it will fail", provider);
            }
        }

        Ok(Self::with_parts(
            config.providers.clone(),
            Arc::new(transport),
            Arc::new(SystemNonceSource::new()),
            Arc::new(SystemClock),
            Duration::from_secs(config.http.timeout_seconds),
        ))
    }

    pub fn with_parts(
        providers: ProvidersConfig,
        transport: Arc<dyn Transport>,
        nonces: Arc<dyn NonceSource>,
        clock: Arc<dyn Clock>,
        timeout: Duration,
    ) -> Self {
        Self {
            providers: Arc::new(providers),
            transport,
            nonces,
            clock,
            timeout,
        }
    }

    pub fn providers(&self) -> &ProvidersConfig {
        &self.providers
    }

    /// Translate `text` from `from` to `to` through `provider`, sending the
    /// provider request with `method`.
    ///
    /// Input is validated before anything is signed or sent. Failures are
    /// classified and returned, never retried.
    pub async fn translate(
        &self,
        provider: Provider,
        method: Method,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<String> {
        let result = self.dispatch(provider, method, text, from, to).await;

        metrics::record_translation(provider, method, result.is_ok());
        if let Err(e) = &result {
            metrics::record_error(provider, e);
        }

        result
    }

    async fn dispatch(
        &self,
        provider: Provider,
        method: Method,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<String> {
        let request = TranslationRequest::new(text, from, to)?;
        request.validate_for(provider)?;

        match provider {
            Provider::Baidu => {
                self.call(BaiduClient::new(&self.providers.baidu)?, method, &request)
                    .await
            }
            Provider::Youdao => {
                self.call(YoudaoClient::new(&self.providers.youdao)?, method, &request)
                    .await
            }
            Provider::Tencent => {
                self.call(TencentClient::new(&self.providers.tencent)?, method, &request)
                    .await
            }
        }
    }

    async fn call<C: ProviderClient>(
        &self,
        client: C,
        method: Method,
        request: &TranslationRequest,
    ) -> Result<String> {
        let provider = client.provider();
        let ctx = SigningContext::new(self.nonces.as_ref(), self.clock.as_ref());
        let outbound = client
            .build_request(method, request, ctx)?
            .with_timeout(self.timeout);

        let started = Instant::now();
        let response = self.transport.send(outbound).await;
        metrics::record_provider_call(provider, method, started.elapsed().as_secs_f64());
        let response = response?;

        if !response.is_success() {
            // Providers usually report errors with 200; a non-2xx body may still
            // carry a recognizable provider error.
            return Err(match client.extract_result(&response.body) {
                Err(e @ TranslateError::ProviderError { .. }) => e,
                _ => TranslateError::UpstreamStatus {
                    status: response.status,
                    body: preview(&response.body),
                },
            });
        }

        let text = client.extract_result(&response.body)?;
        info!(
            "{} translated {} chars via {}",
            provider,
            request.text().chars().count(),
            method.as_str()
        );
        debug!("{} result: {}", provider, text);
        Ok(text)
    }
}

/// Whether credentials for `provider` are present.
pub fn is_configured(providers: &ProvidersConfig, provider: Provider) -> bool {
    match provider {
        Provider::Baidu => providers.baidu.is_configured(),
        Provider::Youdao => providers.youdao.is_configured(),
        Provider::Tencent => providers.tencent.is_configured(),
    }
}

fn preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.chars().count() > MAX_ERROR_BODY {
        text.chars().take(MAX_ERROR_BODY).collect::<String>() + "..."
    } else {
        text.into_owned()
    }
}
