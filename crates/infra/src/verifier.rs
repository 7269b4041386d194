//! # 検証器
//!
//! サービスごとに 1 つの検証器を持つ。各検証器は 1 回だけ外部サービスへ
//! リクエストを送り、レスポンスを判定する。
//!
//! ## 処理の流れ
//!
//! 1. 前提条件チェック（必須補助フィールドが欠けていれば通信せず invalid）
//! 2. [`Verifier::probe`] でリクエストを構築・送信し、レスポンスを判定
//! 3. 通信エラーは [`ProbeError::into_verdict`] で判定に変換
//!
//! [`Verifier::verify`] はエラーを返さない。呼び出し側は常に判定を受け取る。

pub mod anthropic;
pub mod cohere;
pub mod firebase;
pub mod gemini;
pub mod github;
pub mod notion;
pub mod oauth;
pub mod openai;
pub mod stripe;
pub mod supabase;

use async_trait::async_trait;
pub use anthropic::AnthropicVerifier;
pub use cohere::CohereVerifier;
pub use firebase::FirebaseVerifier;
pub use gemini::GeminiVerifier;
pub use github::GithubVerifier;
pub use notion::NotionVerifier;
use keyprobe_domain::{Credentials, Service, VerificationResult};
pub use oauth::{AzureVerifier, ClientCredentialsVerifier};
pub use openai::OpenAiVerifier;
pub use stripe::StripeVerifier;
pub use supabase::SupabaseVerifier;

use crate::error::ProbeError;

/// 検証器トレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
/// 実装するのは [`service`](Verifier::service) と [`probe`](Verifier::probe) のみで、
/// [`verify`](Verifier::verify) は共通実装を使う。
#[async_trait]
pub trait Verifier: Send + Sync {
    /// 担当するサービス
    fn service(&self) -> Service;

    /// 外部サービスへ問い合わせ、レスポンスを判定する
    ///
    /// 前提条件チェック済みの認証情報で呼ばれる。
    async fn probe(&self, credentials: &Credentials) -> Result<VerificationResult, ProbeError>;

    /// 認証情報を検証する
    async fn verify(&self, credentials: &Credentials) -> VerificationResult {
        let service = self.service();

        if let Err(result) = service.descriptor().check_preconditions(credentials) {
            tracing::debug!(
                service = %service,
                "必須補助フィールドが不足しているため通信を省略します"
            );
            return result;
        }

        let result = match self.probe(credentials).await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(
                    service = %service,
                    error.kind = err.kind(),
                    "外部サービスへの問い合わせに失敗しました: {}",
                    err
                );
                err.into_verdict()
            }
        };

        tracing::debug!(
            service = %service,
            status = %result.status,
            "検証が完了しました"
        );
        result
    }
}

/// ベース URL の末尾スラッシュを除去する
fn normalize_base_url(base_url: impl Into<String>) -> String {
    base_url.into().trim_end_matches('/').to_string()
}
