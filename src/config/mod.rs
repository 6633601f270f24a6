// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{Result, TranslateError};
use config::{Config, Environment, File};
use std::path::PathBuf;

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. CLI arguments (highest, applied by the caller)
    /// 2. Environment variables
    /// 3. Config file
    /// 4. Defaults (lowest)
    ///
    /// When `path` is given the file must exist; the default path is optional.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(&Self::default_config_path()).required(false),
        };

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            // Override with environment variables, e.g.
            // TRANSLATE_GATEWAY__PROVIDERS__BAIDU__APP_ID
            .add_source(
                Environment::with_prefix("TRANSLATE_GATEWAY")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .map_err(|e| TranslateError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| TranslateError::Config(e.to_string()))
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".translate-gateway")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}
