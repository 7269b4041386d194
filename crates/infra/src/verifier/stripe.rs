//! # Stripe 検証器
//!
//! シークレットキーをユーザー名、空パスワードとした Basic 認証で
//! `GET /v1/customers?limit=1` を呼び出す。`limit=1` で取得件数を最小に抑える。

use async_trait::async_trait;
use keyprobe_domain::{Credentials, Service, VerificationResult};

use super::{Verifier, normalize_base_url};
use crate::{
    error::ProbeError,
    probe::{HttpProbe, classify_status},
};

pub struct StripeVerifier {
    http:     HttpProbe,
    base_url: String,
}

impl StripeVerifier {
    pub fn new(http: HttpProbe, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: normalize_base_url(base_url),
        }
    }
}

#[async_trait]
impl Verifier for StripeVerifier {
    fn service(&self) -> Service {
        Service::Stripe
    }

    async fn probe(&self, credentials: &Credentials) -> Result<VerificationResult, ProbeError> {
        let url = format!("{}/v1/customers", self.base_url);
        let request = self
            .http
            .client()
            .get(&url)
            .query(&[("limit", "1")])
            .basic_auth(credentials.api_key(), Some(""));

        let response = self.http.send(request).await?;
        Ok(classify_status(response.status()))
    }
}
