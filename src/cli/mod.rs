// CLI module for translate-gateway
// Author: kelexine (https://github.com/kelexine)

use crate::config::AppConfig;
use clap::Parser;

/// translate-gateway - one endpoint for the Baidu, Youdao and Tencent translation APIs
#[derive(Parser, Debug)]
#[command(name = "translate-gateway", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (default: ~/.translate-gateway/config.toml)
    #[arg(short, long, env = "TRANSLATE_GATEWAY_CONFIG")]
    pub config: Option<String>,

    /// Address to bind, overrides `server.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overrides `server.port`
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Args {
    /// CLI flags take precedence over every other configuration source.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
