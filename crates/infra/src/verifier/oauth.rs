//! # OAuth2 Client Credentials 検証器
//!
//! トークンエンドポイントで `grant_type=client_credentials` の交換を行い、
//! アクセストークンが発行されれば有効とする。
//!
//! - Twitter / Spotify: クライアント ID とシークレットを Basic 認証で送る
//! - Azure: テナント固有のエンドポイントにフォームパラメータで送り、
//!   Azure Resource Manager のスコープを要求する

use async_trait::async_trait;
use keyprobe_domain::{AuxField, Credentials, Service, VerificationResult};

use super::{Verifier, normalize_base_url};
use crate::{
    error::ProbeError,
    probe::{HttpProbe, classify_status},
};

const GRANT_TYPE: (&str, &str) = ("grant_type", "client_credentials");

/// Azure Resource Manager のスコープ
const AZURE_SCOPE: &str = "https://management.azure.com/.default";

/// Basic 認証で Client Credentials 交換を行う検証器（Twitter / Spotify）
pub struct ClientCredentialsVerifier {
    http:         HttpProbe,
    service:      Service,
    token_url:    String,
    secret_field: AuxField,
}

impl ClientCredentialsVerifier {
    /// Twitter（`POST /oauth2/token`、シークレットは `api_secret`）
    pub fn twitter(http: HttpProbe, base_url: impl Into<String>) -> Self {
        Self {
            http,
            service: Service::Twitter,
            token_url: format!("{}/oauth2/token", normalize_base_url(base_url)),
            secret_field: AuxField::ApiSecret,
        }
    }

    /// Spotify（`POST /api/token`、シークレットは `client_secret`）
    pub fn spotify(http: HttpProbe, base_url: impl Into<String>) -> Self {
        Self {
            http,
            service: Service::Spotify,
            token_url: format!("{}/api/token", normalize_base_url(base_url)),
            secret_field: AuxField::ClientSecret,
        }
    }
}

#[async_trait]
impl Verifier for ClientCredentialsVerifier {
    fn service(&self) -> Service {
        self.service
    }

    async fn probe(&self, credentials: &Credentials) -> Result<VerificationResult, ProbeError> {
        let secret = credentials.aux_or_empty(self.secret_field);
        let request = self
            .http
            .client()
            .post(&self.token_url)
            .basic_auth(credentials.api_key(), Some(secret))
            .form(&[GRANT_TYPE]);

        let response = self.http.send(request).await?;
        Ok(classify_status(response.status()))
    }
}

/// Azure AD（Microsoft Entra ID）の Client Credentials 検証器
pub struct AzureVerifier {
    http:     HttpProbe,
    base_url: String,
}

impl AzureVerifier {
    pub fn new(http: HttpProbe, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: normalize_base_url(base_url),
        }
    }
}

#[async_trait]
impl Verifier for AzureVerifier {
    fn service(&self) -> Service {
        Service::Azure
    }

    async fn probe(&self, credentials: &Credentials) -> Result<VerificationResult, ProbeError> {
        // テナント ID は利用者の入力なのでパスセグメントとしてエンコードする
        let tenant_id = urlencoding::encode(credentials.aux_or_empty(AuxField::TenantId));
        let url = format!("{}/{}/oauth2/v2.0/token", self.base_url, tenant_id);
        let request = self.http.client().post(&url).form(&[
            GRANT_TYPE,
            ("client_id", credentials.api_key()),
            (
                "client_secret",
                credentials.aux_or_empty(AuxField::ClientSecret),
            ),
            ("scope", AZURE_SCOPE),
        ]);

        let response = self.http.send(request).await?;
        Ok(classify_status(response.status()))
    }
}
