//! # Cohere 検証器

use async_trait::async_trait;
use keyprobe_domain::{Credentials, Service, VerificationResult};

use super::{Verifier, normalize_base_url};
use crate::{
    error::ProbeError,
    probe::{HttpProbe, classify_status},
};

/// `GET /v1/models` を Bearer トークンで呼び出す検証器
pub struct CohereVerifier {
    http:     HttpProbe,
    base_url: String,
}

impl CohereVerifier {
    pub fn new(http: HttpProbe, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: normalize_base_url(base_url),
        }
    }
}

#[async_trait]
impl Verifier for CohereVerifier {
    fn service(&self) -> Service {
        Service::Cohere
    }

    async fn probe(&self, credentials: &Credentials) -> Result<VerificationResult, ProbeError> {
        let url = format!("{}/v1/models", self.base_url);
        let request = self.http.client().get(&url).bearer_auth(credentials.api_key());

        let response = self.http.send(request).await?;
        Ok(classify_status(response.status()))
    }
}
