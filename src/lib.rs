// translate-gateway - one endpoint for the Baidu, Youdao and Tencent translation APIs
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod providers;
pub mod server;
pub mod signing;
pub mod translator;
pub mod transport;
pub mod utils;
