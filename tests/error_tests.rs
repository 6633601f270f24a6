// Error handling tests
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use translate_gateway::error::TranslateError;

#[test]
fn test_error_display_messages() {
    let errors = vec![
        TranslateError::InvalidInput("text must not be empty".to_string()),
        TranslateError::UnsupportedProvider("google".to_string()),
        TranslateError::UnsupportedMethod("put".to_string()),
        TranslateError::SigningFailure("no entropy".to_string()),
        TranslateError::Transport("connection refused".to_string()),
        TranslateError::MalformedResponse("expected value".to_string()),
        TranslateError::EmptyResult("no trans_result".to_string()),
        TranslateError::ProviderError {
            code: "54001".to_string(),
            message: "Invalid Sign".to_string(),
        },
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_provider_error_display() {
    let error = TranslateError::ProviderError {
        code: "54001".to_string(),
        message: "Invalid Sign".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("54001"));
    assert!(display.contains("Invalid Sign"));
}

#[test]
fn test_unsupported_provider_lists_valid_names() {
    let error = TranslateError::UnsupportedProvider("google".to_string());
    let display = format!("{}", error);
    assert!(display.contains("google"));
    assert!(display.contains("baidu"));
}

#[test]
fn test_status_codes() {
    assert_eq!(
        TranslateError::InvalidInput("x".into()).status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        TranslateError::UnsupportedMethod("x".into()).status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        TranslateError::Transport("x".into()).status_code(),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        TranslateError::EmptyResult("x".into()).status_code(),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        TranslateError::SigningFailure("x".into()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        TranslateError::MissingCredentials("baidu".into()).status_code(),
        StatusCode::SERVICE_UNAVAILABLE
    );
}

#[tokio::test]
async fn test_error_envelope() {
    let response = TranslateError::MalformedResponse("expected value at line 1".to_string())
        .into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "502");
    assert_eq!(body["error_type"], "malformed_response");
    assert!(body["error"].as_str().unwrap().contains("expected value"));
}
