//! # Supabase 検証器
//!
//! プロジェクト URL はリクエストごとに異なるため、補助フィールド `base_url` で受け取る。
//! `GET {base_url}/rest/v1/` を `apikey` ヘッダーと Bearer トークンの両方で呼び出す。

use async_trait::async_trait;
use keyprobe_domain::{AuxField, Credentials, Service, VerificationResult};

use super::{Verifier, normalize_base_url};
use crate::{
    error::ProbeError,
    probe::{HttpProbe, classify_status},
};

pub struct SupabaseVerifier {
    http: HttpProbe,
}

impl SupabaseVerifier {
    pub fn new(http: HttpProbe) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Verifier for SupabaseVerifier {
    fn service(&self) -> Service {
        Service::Supabase
    }

    async fn probe(&self, credentials: &Credentials) -> Result<VerificationResult, ProbeError> {
        let base_url = normalize_base_url(credentials.aux_or_empty(AuxField::BaseUrl));
        let url = format!("{base_url}/rest/v1/");
        let request = self
            .http
            .client()
            .get(&url)
            .header("apikey", credentials.api_key())
            .bearer_auth(credentials.api_key());

        let response = self.http.send(request).await?;
        Ok(classify_status(response.status()))
    }
}
