//! # Notion 検証器
//!
//! `GET /v1/users/me` を Bearer トークンで呼び出す。
//! Notion API は `Notion-Version` ヘッダーを必須とする。

use async_trait::async_trait;
use keyprobe_domain::{Credentials, Service, VerificationResult};

use super::{Verifier, normalize_base_url};
use crate::{
    error::ProbeError,
    probe::{HttpProbe, classify_status},
};

const NOTION_VERSION: &str = "2022-06-28";

pub struct NotionVerifier {
    http:     HttpProbe,
    base_url: String,
}

impl NotionVerifier {
    pub fn new(http: HttpProbe, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: normalize_base_url(base_url),
        }
    }
}

#[async_trait]
impl Verifier for NotionVerifier {
    fn service(&self) -> Service {
        Service::Notion
    }

    async fn probe(&self, credentials: &Credentials) -> Result<VerificationResult, ProbeError> {
        let url = format!("{}/v1/users/me", self.base_url);
        let request = self
            .http
            .client()
            .get(&url)
            .bearer_auth(credentials.api_key())
            .header("Notion-Version", NOTION_VERSION);

        let response = self.http.send(request).await?;
        Ok(classify_status(response.status()))
    }
}
