//! # 検証器レジストリ
//!
//! サービス識別子から検証器を引く対応表。
//! 識別子は大文字小文字を区別せずに解釈し、未対応の識別子はエラーにする。

use std::{collections::HashMap, sync::Arc};

use keyprobe_domain::{Credentials, DomainError, Service, VerificationResult};

use crate::{
    endpoints::ProviderEndpoints,
    probe::HttpProbe,
    verifier::{
        AnthropicVerifier,
        AzureVerifier,
        ClientCredentialsVerifier,
        CohereVerifier,
        FirebaseVerifier,
        GeminiVerifier,
        GithubVerifier,
        NotionVerifier,
        OpenAiVerifier,
        StripeVerifier,
        SupabaseVerifier,
        Verifier,
    },
};

/// 検証器レジストリ
#[derive(Default)]
pub struct VerifierRegistry {
    verifiers: HashMap<Service, Arc<dyn Verifier>>,
}

impl VerifierRegistry {
    /// 空のレジストリを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 全 12 サービスの検証器を登録したレジストリを作成する
    pub fn with_defaults(http: &HttpProbe, endpoints: &ProviderEndpoints) -> Self {
        Self::new()
            .register(Arc::new(OpenAiVerifier::new(http.clone(), &endpoints.openai)))
            .register(Arc::new(AnthropicVerifier::new(
                http.clone(),
                &endpoints.anthropic,
            )))
            .register(Arc::new(CohereVerifier::new(http.clone(), &endpoints.cohere)))
            .register(Arc::new(StripeVerifier::new(http.clone(), &endpoints.stripe)))
            .register(Arc::new(GithubVerifier::new(http.clone(), &endpoints.github)))
            .register(Arc::new(NotionVerifier::new(http.clone(), &endpoints.notion)))
            .register(Arc::new(GeminiVerifier::new(http.clone(), &endpoints.gemini)))
            .register(Arc::new(FirebaseVerifier::new(
                http.clone(),
                &endpoints.firebase,
            )))
            .register(Arc::new(ClientCredentialsVerifier::twitter(
                http.clone(),
                &endpoints.twitter,
            )))
            .register(Arc::new(ClientCredentialsVerifier::spotify(
                http.clone(),
                &endpoints.spotify,
            )))
            .register(Arc::new(AzureVerifier::new(http.clone(), &endpoints.azure)))
            .register(Arc::new(SupabaseVerifier::new(http.clone())))
    }

    /// 検証器を登録する
    ///
    /// 同じサービスの検証器が登録済みの場合は置き換える。
    pub fn register(mut self, verifier: Arc<dyn Verifier>) -> Self {
        self.verifiers.insert(verifier.service(), verifier);
        self
    }

    /// 登録済みのサービス数
    pub fn len(&self) -> usize {
        self.verifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verifiers.is_empty()
    }

    /// サービス識別子に対応する検証器で検証する
    ///
    /// 識別子が未対応、または検証器が登録されていない場合は
    /// [`DomainError::UnsupportedService`] を返す。外部通信は行わない。
    pub async fn dispatch(
        &self,
        identifier: &str,
        credentials: &Credentials,
    ) -> Result<VerificationResult, DomainError> {
        let service = Service::parse(identifier)?;
        let verifier = self
            .verifiers
            .get(&service)
            .ok_or_else(|| DomainError::UnsupportedService(identifier.to_string()))?;

        Ok(verifier.verify(credentials).await)
    }
}
