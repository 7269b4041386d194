//! # Anthropic 検証器
//!
//! `POST /v1/messages` に最小のメッセージ（最大 5 トークン）を送る。
//! 認証は `x-api-key` ヘッダーで行い、`anthropic-version` ヘッダーを必須とする。

use async_trait::async_trait;
use keyprobe_domain::{Credentials, Service, VerificationResult};
use serde::Serialize;

use super::{Verifier, normalize_base_url};
use crate::{
    error::ProbeError,
    probe::{HttpProbe, classify_status},
};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const PROBE_MODEL: &str = "claude-3-haiku-20240307";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model:      &'a str,
    max_tokens: u32,
    messages:   [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role:    &'a str,
    content: &'a str,
}

pub struct AnthropicVerifier {
    http:     HttpProbe,
    base_url: String,
}

impl AnthropicVerifier {
    pub fn new(http: HttpProbe, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: normalize_base_url(base_url),
        }
    }
}

#[async_trait]
impl Verifier for AnthropicVerifier {
    fn service(&self) -> Service {
        Service::Anthropic
    }

    async fn probe(&self, credentials: &Credentials) -> Result<VerificationResult, ProbeError> {
        let url = format!("{}/v1/messages", self.base_url);
        let body = MessagesRequest {
            model:      PROBE_MODEL,
            max_tokens: 5,
            messages:   [Message {
                role:    "user",
                content: "Hi",
            }],
        };
        let request = self
            .http
            .client()
            .post(&url)
            .header("x-api-key", credentials.api_key())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body);

        let response = self.http.send(request).await?;
        Ok(classify_status(response.status()))
    }
}
