//! テスト共通フィクスチャ
//!
//! 外部サービスへ通信しないスタブ検証器と、ルーターへのリクエスト送信ヘルパー。

#![allow(dead_code)]

use std::sync::{
    Arc,
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{Router, body::Body};
use http::{Request, Response};
use keyprobe_domain::{Credentials, Service, VerificationResult};
use keyprobe_infra::{ProbeError, Verifier, VerifierRegistry};
use keyprobe_server::app::build_router;
use tower::ServiceExt;

/// 固定の判定を返し、受け取った認証情報を記録するスタブ
pub struct StubVerifier {
    service:  Service,
    result:   VerificationResult,
    calls:    AtomicUsize,
    received: Mutex<Option<Credentials>>,
}

impl StubVerifier {
    pub fn new(service: Service, result: VerificationResult) -> Arc<Self> {
        Arc::new(Self {
            service,
            result,
            calls: AtomicUsize::new(0),
            received: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Option<Credentials> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl Verifier for StubVerifier {
    fn service(&self) -> Service {
        self.service
    }

    async fn probe(&self, credentials: &Credentials) -> Result<VerificationResult, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.received.lock().unwrap() = Some(credentials.clone());
        Ok(self.result.clone())
    }
}

/// 呼ばれると panic するスタブ
pub struct PanickingVerifier(pub Service);

#[async_trait]
impl Verifier for PanickingVerifier {
    fn service(&self) -> Service {
        self.0
    }

    async fn probe(&self, _credentials: &Credentials) -> Result<VerificationResult, ProbeError> {
        panic!("stub verifier panicked with sk-should-not-leak");
    }
}

/// スタブ検証器を 1 つ登録したルーターを作成する
pub fn app_with(verifier: Arc<dyn Verifier>) -> Router {
    build_router(VerifierRegistry::new().register(verifier))
}

/// 検証器を登録していないルーター
pub fn empty_app() -> Router {
    build_router(VerifierRegistry::new())
}

pub fn json_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/verify")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn form_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/verify")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn multipart_request(fields: &[(&str, &str)]) -> Request<Body> {
    const BOUNDARY: &str = "keyprobe-test-boundary";

    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    Request::builder()
        .method("POST")
        .uri("/verify")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
