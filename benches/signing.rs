// Signing and request-building benchmarks
// Author: kelexine (https://github.com/kelexine)

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use translate_gateway::config::TencentConfig;
use translate_gateway::providers::{request, tencent, Method, TranslationRequest};
use translate_gateway::signing::{hmac_sha1_base64, md5_hex, sha256_hex, truncate};

const LONG_TEXT: &str = "The quick brown fox jumps over the lazy dog, again and again, \
    until the translation service has something substantial to chew on.";

fn benchmark_digests(c: &mut Criterion) {
    c.bench_function("md5_hex", |b| {
        b.iter(|| black_box(md5_hex(black_box("20210403000760696hellos1cXX2Q1PSF7HsFeArJLaR"))))
    });

    c.bench_function("sha256_hex", |b| {
        b.iter(|| black_box(sha256_hex(black_box("app123hellon11700000000secret"))))
    });

    c.bench_function("hmac_sha1_base64", |b| {
        b.iter(|| black_box(hmac_sha1_base64(black_box("keytest"), black_box(LONG_TEXT))))
    });

    c.bench_function("truncate_long_text", |b| {
        b.iter(|| black_box(truncate(black_box(LONG_TEXT))))
    });
}

fn benchmark_tencent_request(c: &mut Criterion) {
    let config = TencentConfig {
        secret_id: "AKIDtest".to_string(),
        secret_key: "keytest".to_string(),
        ..TencentConfig::default()
    };
    let translation = TranslationRequest::new(LONG_TEXT, "en", "zh").unwrap();

    c.bench_function("tencent_sign", |b| {
        b.iter(|| {
            let params = tencent::canonicalize(&translation, &config, 42, 1_700_000_000);
            black_box(tencent::sign(&params, Method::Post, &config))
        })
    });

    let params = tencent::canonicalize(&translation, &config, 42, 1_700_000_000);
    c.bench_function("build_get_url", |b| {
        b.iter(|| black_box(request::build_get(black_box(&config.endpoint), &params)))
    });
}

criterion_group!(benches, benchmark_digests, benchmark_tencent_request);
criterion_main!(benches);
