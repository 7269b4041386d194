//! # GitHub 検証器
//!
//! `GET /user` を Bearer トークンで呼び出す。

use async_trait::async_trait;
use keyprobe_domain::{Credentials, Service, VerificationResult};
use reqwest::header::ACCEPT;

use super::{Verifier, normalize_base_url};
use crate::{
    error::ProbeError,
    probe::{HttpProbe, classify_status},
};

pub struct GithubVerifier {
    http:     HttpProbe,
    base_url: String,
}

impl GithubVerifier {
    pub fn new(http: HttpProbe, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: normalize_base_url(base_url),
        }
    }
}

#[async_trait]
impl Verifier for GithubVerifier {
    fn service(&self) -> Service {
        Service::Github
    }

    async fn probe(&self, credentials: &Credentials) -> Result<VerificationResult, ProbeError> {
        let url = format!("{}/user", self.base_url);
        let request = self
            .http
            .client()
            .get(&url)
            .bearer_auth(credentials.api_key())
            .header(ACCEPT, "application/vnd.github+json");

        let response = self.http.send(request).await?;
        Ok(classify_status(response.status()))
    }
}
