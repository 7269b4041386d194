//! # OpenAI 検証器
//!
//! `GET /v1/models` を Bearer トークンで呼び出し、モデル一覧が空でなければ有効とする。
//! 認証は通るがモデルを 1 つも参照できないキーは `API Key Inactive` になる。

use async_trait::async_trait;
use keyprobe_domain::{Credentials, Service, VerificationResult};
use reqwest::StatusCode;
use serde::Deserialize;

use super::{Verifier, normalize_base_url};
use crate::{
    error::ProbeError,
    probe::{HttpProbe, classify_status},
};

#[derive(Debug, Deserialize)]
struct ModelList {
    #[serde(default)]
    data: Vec<serde_json::Value>,
}

pub struct OpenAiVerifier {
    http:     HttpProbe,
    base_url: String,
}

impl OpenAiVerifier {
    pub fn new(http: HttpProbe, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: normalize_base_url(base_url),
        }
    }
}

#[async_trait]
impl Verifier for OpenAiVerifier {
    fn service(&self) -> Service {
        Service::Openai
    }

    async fn probe(&self, credentials: &Credentials) -> Result<VerificationResult, ProbeError> {
        let url = format!("{}/v1/models", self.base_url);
        let request = self.http.client().get(&url).bearer_auth(credentials.api_key());

        let response = self.http.send(request).await?;
        if response.status() != StatusCode::OK {
            return Ok(classify_status(response.status()));
        }

        let models = response.json::<ModelList>().await?;
        if models.data.is_empty() {
            Ok(VerificationResult::inactive())
        } else {
            Ok(VerificationResult::active())
        }
    }
}
