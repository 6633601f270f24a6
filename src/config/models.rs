//! Configuration data structures for translate-gateway.
//!
//! This module defines the schema for the application settings: the HTTP
//! server, the outbound HTTP client, per-provider credentials and endpoints,
//! and logging.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port, workers).
    #[serde(default)]
    pub server: ServerConfig,

    /// Outbound HTTP client settings shared by all providers.
    #[serde(default)]
    pub http: HttpConfig,

    /// Credentials and endpoints of the translation providers.
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `127.0.0.1`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `8080`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of tokio worker threads.
    /// Default: Number of logical CPU cores.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// Settings for the outbound HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Upper bound for one provider call, connect included.
    /// Default: `10`
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Default: `5`
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,

    /// Default: `10`
    #[serde(default = "default_pool_size")]
    pub pool_max_idle_per_host: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub baidu: BaiduConfig,

    #[serde(default)]
    pub youdao: YoudaoConfig,

    #[serde(default)]
    pub tencent: TencentConfig,
}

/// Baidu general translation API (`appid` + `appkey`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaiduConfig {
    #[serde(default = "default_baidu_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub app_id: String,

    #[serde(default)]
    pub app_key: String,
}

/// Youdao open API (application id + application secret).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoudaoConfig {
    #[serde(default = "default_youdao_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub app_id: String,

    #[serde(default)]
    pub app_key: String,
}

/// Tencent Cloud machine translation (`SecretId` + `SecretKey`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TencentConfig {
    #[serde(default = "default_tencent_endpoint")]
    pub endpoint: String,

    /// Host segment of the signing base string. Kept separate from
    /// `endpoint` so the request can be routed elsewhere while still
    /// being signed for the real host.
    #[serde(default = "default_tencent_sign_host")]
    pub sign_host: String,

    #[serde(default = "default_tencent_region")]
    pub region: String,

    #[serde(default)]
    pub secret_id: String,

    #[serde(default)]
    pub secret_key: String,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl BaiduConfig {
    pub fn is_configured(&self) -> bool {
        !self.app_id.is_empty() && !self.app_key.is_empty()
    }
}

impl YoudaoConfig {
    pub fn is_configured(&self) -> bool {
        !self.app_id.is_empty() && !self.app_key.is_empty()
    }
}

impl TencentConfig {
    pub fn is_configured(&self) -> bool {
        !self.secret_id.is_empty() && !self.secret_key.is_empty()
    }
}

// Default trait implementations linking to custom logic

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            pool_max_idle_per_host: default_pool_size(),
        }
    }
}

impl Default for BaiduConfig {
    fn default() -> Self {
        Self {
            endpoint: default_baidu_endpoint(),
            app_id: String::new(),
            app_key: String::new(),
        }
    }
}

impl Default for YoudaoConfig {
    fn default() -> Self {
        Self {
            endpoint: default_youdao_endpoint(),
            app_id: String::new(),
            app_key: String::new(),
        }
    }
}

impl Default for TencentConfig {
    fn default() -> Self {
        Self {
            endpoint: default_tencent_endpoint(),
            sign_host: default_tencent_sign_host(),
            region: default_tencent_region(),
            secret_id: String::new(),
            secret_key: String::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Helper functions for serde defaults and shared constants
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_timeout() -> u64 {
    10
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_pool_size() -> usize {
    10
}

fn default_baidu_endpoint() -> String {
    "https://fanyi-api.baidu.com/api/trans/vip/translate".to_string()
}

fn default_youdao_endpoint() -> String {
    "https://openapi.youdao.com/api".to_string()
}

fn default_tencent_endpoint() -> String {
    "https://tmt.tencentcloudapi.com/".to_string()
}

fn default_tencent_sign_host() -> String {
    "tmt.tencentcloudapi.com".to_string()
}

fn default_tencent_region() -> String {
    "ap-guangzhou".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
