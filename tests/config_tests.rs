// Configuration defaults and file loading
// Author: kelexine (https://github.com/kelexine)

use std::io::Write;
use translate_gateway::cli::Args;
use translate_gateway::config::AppConfig;

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert!(config.server.workers >= 1);
    assert_eq!(config.http.timeout_seconds, 10);
    assert_eq!(
        config.providers.baidu.endpoint,
        "https://fanyi-api.baidu.com/api/trans/vip/translate"
    );
    assert_eq!(config.providers.youdao.endpoint, "https://openapi.youdao.com/api");
    assert_eq!(config.providers.tencent.endpoint, "https://tmt.tencentcloudapi.com/");
    assert_eq!(config.providers.tencent.sign_host, "tmt.tencentcloudapi.com");
    assert_eq!(config.providers.tencent.region, "ap-guangzhou");
    assert!(!config.providers.baidu.is_configured());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[server]
port = 9090

[http]
timeout_seconds = 3

[providers.baidu]
app_id = "20210403000760696"
app_key = "cXX2Q1PSF7HsFeArJLaR"

[providers.tencent]
secret_id = "AKIDtest"
secret_key = "keytest"
region = "ap-shanghai"
"#
    )
    .unwrap();

    let config = AppConfig::load(Some(file.path().to_str().unwrap())).unwrap();

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.http.timeout_seconds, 3);
    assert!(config.providers.baidu.is_configured());
    assert!(!config.providers.youdao.is_configured());
    assert_eq!(config.providers.tencent.region, "ap-shanghai");
    assert_eq!(config.providers.tencent.sign_host, "tmt.tencentcloudapi.com");
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    assert!(AppConfig::load(Some("/nonexistent/translate-gateway.toml")).is_err());
}

#[test]
fn test_cli_overrides() {
    use clap::Parser;

    let args = Args::parse_from(["translate-gateway", "--host", "0.0.0.0", "--port", "3000"]);
    let mut config = AppConfig::default();
    args.apply(&mut config);

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
}
