//! # /verify ルート 統合テスト
//!
//! 実際のルーターにスタブ検証器を注入し、ボディ形式ごとの抽出と
//! エラー時のレスポンス形状を検証する。外部サービスへは通信しない。
//!
//! 実行方法:
//! ```bash
//! cargo test -p keyprobe-server --test verify_test
//! ```

mod common;

use std::sync::Arc;

use axum::body::Body;
use common::{
    PanickingVerifier,
    StubVerifier,
    app_with,
    body_json,
    empty_app,
    form_request,
    json_request,
    multipart_request,
    send,
};
use http::{Request, StatusCode};
use keyprobe_domain::{AuxField, Service, VerificationResult};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

#[tokio::test]
async fn test_jsonボディで検証結果を返す() {
    // Given
    let stub = StubVerifier::new(Service::Openai, VerificationResult::active());
    let sut = app_with(stub.clone());

    // When
    let response = send(
        sut,
        json_request(json!({ "api_key": " sk-test ", "service": "openai" })),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "status": "valid", "message": "API Key Active", "icon": "✅" })
    );
    assert_eq!(stub.calls(), 1);
    assert_eq!(stub.received().unwrap().api_key(), "sk-test");
}

#[tokio::test]
async fn test_urlエンコードされたフォームを受け付ける() {
    // Given
    let stub = StubVerifier::new(Service::Stripe, VerificationResult::rejected());
    let sut = app_with(stub.clone());

    // When
    let response = send(sut, form_request("api_key=sk_test_123&service=+Stripe+")).await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "status": "invalid", "message": "API Key Invalid", "icon": "❌" })
    );
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn test_multipartフォームの補助フィールドを渡す() {
    // Given
    let stub = StubVerifier::new(Service::Azure, VerificationResult::active());
    let sut = app_with(stub.clone());

    // When
    let response = send(
        sut,
        multipart_request(&[
            ("service", "azure"),
            ("api_key", "app-id"),
            ("client_secret", "app-secret"),
            ("tenant_id", "tenant-123"),
            ("unrelated", "ignored"),
        ]),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "valid");

    let received = stub.received().unwrap();
    assert_eq!(received.api_key(), "app-id");
    assert_eq!(received.aux().get(AuxField::ClientSecret), Some("app-secret"));
    assert_eq!(received.aux().get(AuxField::TenantId), Some("tenant-123"));
}

#[rstest]
#[case(json!({ "service": "openai" }))]
#[case(json!({ "api_key": "", "service": "openai" }))]
#[case(json!({ "api_key": "   ", "service": "openai" }))]
#[case(json!({ "api_key": "sk-test" }))]
#[case(json!({ "api_key": "sk-test", "service": "" }))]
#[case(json!({}))]
#[tokio::test]
async fn test_必須項目が欠けていればapi_key_required(#[case] body: serde_json::Value) {
    // Given
    let stub = StubVerifier::new(Service::Openai, VerificationResult::active());
    let sut = app_with(stub.clone());

    // When
    let response = send(sut, json_request(body)).await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "status": "error", "message": "API Key Required" })
    );
    assert_eq!(stub.calls(), 0);
}

#[rstest]
#[case("application/json", "{not json")]
#[case("application/json", "[1, 2, 3]")]
#[case("application/json", r#"{"api_key": 123, "service": "openai"}"#)]
#[case("application/json", r#"{"api_key": "sk-test", "service": ["openai"]}"#)]
#[case("text/plain", "api_key=sk-test&service=openai")]
#[case("multipart/form-data", "no boundary")]
#[tokio::test]
async fn test_解釈できないボディはapi_key_required(
    #[case] content_type: &str,
    #[case] body: &'static str,
) {
    // Given
    let sut = app_with(StubVerifier::new(
        Service::Openai,
        VerificationResult::active(),
    ));
    let request = Request::builder()
        .method("POST")
        .uri("/verify")
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();

    // When
    let response = send(sut, request).await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "API Key Required");
}

#[rstest]
#[case("gitlab")]
#[case("open ai")]
#[case("openai2")]
#[tokio::test]
async fn test_未対応のサービスはinvalid_service(#[case] service: &str) {
    // Given
    let stub = StubVerifier::new(Service::Openai, VerificationResult::active());
    let sut = app_with(stub.clone());

    // When
    let response = send(
        sut,
        json_request(json!({ "api_key": "sk-test", "service": service })),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "status": "error", "message": "Invalid Service" })
    );
    assert_eq!(stub.calls(), 0);
}

#[rstest]
#[case("github")]
#[case("GitHub")]
#[case("GITHUB")]
#[tokio::test]
async fn test_サービス名は大文字小文字を区別しない(#[case] service: &str) {
    let stub = StubVerifier::new(Service::Github, VerificationResult::active());
    let sut = app_with(stub.clone());

    let response = send(
        sut,
        json_request(json!({ "api_key": "ghp_test", "service": service })),
    )
    .await;

    assert_eq!(body_json(response).await["status"], "valid");
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn test_補助フィールドが欠けていれば検証器を呼ばずinvalid() {
    // Given
    let stub = StubVerifier::new(Service::Twitter, VerificationResult::active());
    let sut = app_with(stub.clone());

    // When
    let response = send(
        sut,
        form_request("api_key=tw-key&service=twitter&api_secret=++"),
    )
    .await;

    // Then
    assert_eq!(
        body_json(response).await,
        json!({
            "status": "invalid",
            "message": "API Key Invalid - Twitter Secret Required",
            "icon": "❌"
        })
    );
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_検証中のpanicはserver_errorの500になる() {
    // Given
    let sut = app_with(Arc::new(PanickingVerifier(Service::Notion)));

    // When
    let response = send(
        sut,
        json_request(json!({ "api_key": "secret_notion", "service": "notion" })),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json, json!({ "status": "error", "message": "Server Error" }));
}

#[tokio::test]
async fn test_verifyへのgetは405() {
    let sut = empty_app();
    let request = Request::builder()
        .uri("/verify")
        .body(Body::empty())
        .unwrap();

    let response = send(sut, request).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
