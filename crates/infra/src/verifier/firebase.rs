//! # Firebase 検証器
//!
//! Firebase Auth REST API の `accounts:signUp` を API キー付きで呼び出す。
//!
//! 匿名サインアップが無効なプロジェクトでは、キーが受理されても 400 が返る。
//! そのため 400 のボディにキー拒否を示すマーカーがあるかどうかで判定する。
//!
//! | レスポンス | 判定 |
//! |-----------|------|
//! | 400 + キー拒否マーカー | invalid |
//! | 400（マーカーなし） | valid |
//! | その他（200 を含む） | invalid |

use async_trait::async_trait;
use keyprobe_domain::{Credentials, Service, VerificationResult};
use reqwest::StatusCode;
use serde_json::json;

use super::{Verifier, normalize_base_url};
use crate::{error::ProbeError, probe::HttpProbe};

/// キー拒否を示すマーカー
///
/// Identity Toolkit はエラーメッセージに `INVALID_API_KEY`、
/// Google API 共通のエラー詳細に `API_KEY_INVALID` を含める。
const INVALID_KEY_MARKERS: [&str; 2] = ["INVALID_API_KEY", "API_KEY_INVALID"];

pub struct FirebaseVerifier {
    http:     HttpProbe,
    base_url: String,
}

impl FirebaseVerifier {
    pub fn new(http: HttpProbe, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: normalize_base_url(base_url),
        }
    }
}

/// 400 レスポンスのボディから判定する
fn classify_bad_request(body: &str) -> VerificationResult {
    if INVALID_KEY_MARKERS.iter().any(|marker| body.contains(marker)) {
        VerificationResult::rejected()
    } else {
        VerificationResult::active()
    }
}

#[async_trait]
impl Verifier for FirebaseVerifier {
    fn service(&self) -> Service {
        Service::Firebase
    }

    async fn probe(&self, credentials: &Credentials) -> Result<VerificationResult, ProbeError> {
        let url = format!("{}/v1/accounts:signUp", self.base_url);
        let request = self
            .http
            .client()
            .post(&url)
            .query(&[("key", credentials.api_key())])
            .json(&json!({ "returnSecureToken": true }));

        let response = self.http.send(request).await?;
        match response.status() {
            StatusCode::BAD_REQUEST => {
                let body = response.text().await?;
                Ok(classify_bad_request(&body))
            }
            _ => Ok(VerificationResult::rejected()),
        }
    }
}
