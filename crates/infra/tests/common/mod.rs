//! テスト共通フィクスチャ
//!
//! wiremock のモックサーバーに全サービスを向けたレジストリと、
//! 認証情報の生成ヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use std::time::Duration;

use keyprobe_domain::{ApiKey, AuxiliarySecrets, Credentials};
use keyprobe_infra::{DEFAULT_TIMEOUT, HttpProbe, ProviderEndpoints, VerifierRegistry};
use wiremock::MockServer;

/// 全サービスをモックサーバーに向けたレジストリを作成する
pub fn registry_for(server: &MockServer) -> VerifierRegistry {
    registry_with_timeout(&server.uri(), DEFAULT_TIMEOUT)
}

/// 任意のベース URL とタイムアウトでレジストリを作成する
pub fn registry_with_timeout(base_url: &str, timeout: Duration) -> VerifierRegistry {
    let http = HttpProbe::new(timeout).unwrap();
    VerifierRegistry::with_defaults(&http, &ProviderEndpoints::uniform(base_url))
}

/// 補助フィールドなしの認証情報
pub fn credentials(api_key: &str) -> Credentials {
    Credentials::new(ApiKey::new(api_key).unwrap(), AuxiliarySecrets::default())
}

/// 補助フィールド付きの認証情報
#[derive(Default)]
pub struct CredentialsBuilder {
    api_secret:    Option<String>,
    client_secret: Option<String>,
    tenant_id:     Option<String>,
    base_url:      Option<String>,
}

impl CredentialsBuilder {
    pub fn api_secret(mut self, value: &str) -> Self {
        self.api_secret = Some(value.to_string());
        self
    }

    pub fn client_secret(mut self, value: &str) -> Self {
        self.client_secret = Some(value.to_string());
        self
    }

    pub fn tenant_id(mut self, value: &str) -> Self {
        self.tenant_id = Some(value.to_string());
        self
    }

    pub fn base_url(mut self, value: &str) -> Self {
        self.base_url = Some(value.to_string());
        self
    }

    pub fn build(self, api_key: &str) -> Credentials {
        let aux = AuxiliarySecrets::from_fields(
            self.api_secret,
            self.client_secret,
            self.tenant_id,
            self.base_url,
        )
        .unwrap();
        Credentials::new(ApiKey::new(api_key).unwrap(), aux)
    }
}
