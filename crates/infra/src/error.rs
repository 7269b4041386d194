//! # 通信エラー
//!
//! 外部サービスへの問い合わせで発生するエラーを、エラーメッセージの文言ではなく
//! reqwest の構造化された分類（`is_timeout` / `is_connect` など）で区別する。
//!
//! | バリアント | 判定 | メッセージ |
//! |-----------|------|-----------|
//! | `Timeout` | error | `Timeout Error` |
//! | `Connection` | error | `Connection Error` |
//! | `Decode` | invalid | `API Key Invalid` |
//! | `InvalidRequest` | invalid | `API Key Invalid` |

use keyprobe_domain::VerificationResult;
use thiserror::Error;

/// 外部サービス問い合わせのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// タイムアウト（接続・応答待ちのいずれも含む）
    #[error("タイムアウトしました")]
    Timeout,

    /// 接続失敗（接続拒否、DNS 解決失敗、TLS エラーなど）
    #[error("接続に失敗しました: {0}")]
    Connection(String),

    /// レスポンスボディの解析失敗
    #[error("レスポンスの解析に失敗しました: {0}")]
    Decode(String),

    /// リクエストを構築できない（不正な URL など）
    ///
    /// 利用者が入力した Supabase URL が不正な場合に発生する。
    #[error("リクエストを構築できません: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        // Gemini / Firebase はクエリに API キーを含むため URL を除いてから文字列化する
        let err = err.without_url();
        if err.is_timeout() {
            ProbeError::Timeout
        } else if err.is_builder() {
            ProbeError::InvalidRequest(err.to_string())
        } else if err.is_decode() {
            ProbeError::Decode(err.to_string())
        } else {
            ProbeError::Connection(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(err: serde_json::Error) -> Self {
        ProbeError::Decode(err.to_string())
    }
}

impl ProbeError {
    /// ログ用のエラー種別
    pub fn kind(&self) -> &'static str {
        match self {
            ProbeError::Timeout => "timeout",
            ProbeError::Connection(_) => "connection",
            ProbeError::Decode(_) => "decode",
            ProbeError::InvalidRequest(_) => "invalid_request",
        }
    }

    /// 検証結果に変換する
    pub fn into_verdict(self) -> VerificationResult {
        match self {
            ProbeError::Timeout => VerificationResult::timeout_error(),
            ProbeError::Connection(_) => VerificationResult::connection_error(),
            ProbeError::Decode(_) | ProbeError::InvalidRequest(_) => VerificationResult::rejected(),
        }
    }
}
