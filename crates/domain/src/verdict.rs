//! # 検証結果
//!
//! 1 回の検証で得られる三値の判定（valid / invalid / error）と、
//! 利用者に表示するメッセージを表す。
//!
//! - `valid`: キーが受理された
//! - `invalid`: キーが拒否された（レート制限を含む）
//! - `error`: 通信失敗などで判定できなかった

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// 有効なキーに付けるマーカー
const ICON_ACTIVE: &str = "✅";
/// 拒否されたキーに付けるマーカー
const ICON_REJECTED: &str = "❌";

/// 判定ステータス
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VerificationStatus {
    Valid,
    Invalid,
    Error,
}

/// 検証結果
///
/// API レスポンスとしてそのままシリアライズされる。
/// `icon` は判定を伴う結果にのみ付与され、`None` の場合はフィールドごと省略する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub status:  VerificationStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon:    Option<String>,
}

impl VerificationResult {
    fn new(status: VerificationStatus, message: impl Into<String>, icon: Option<&str>) -> Self {
        Self {
            status,
            message: message.into(),
            icon: icon.map(str::to_string),
        }
    }

    /// キーが有効
    pub fn active() -> Self {
        Self::new(VerificationStatus::Valid, "API Key Active", Some(ICON_ACTIVE))
    }

    /// キーが拒否された
    pub fn rejected() -> Self {
        Self::new(
            VerificationStatus::Invalid,
            "API Key Invalid",
            Some(ICON_REJECTED),
        )
    }

    /// レート制限された
    ///
    /// 「有効かもしれない」とは扱わず invalid とする。
    pub fn rate_limited() -> Self {
        Self::new(
            VerificationStatus::Invalid,
            "API Key Rate Limited",
            Some(ICON_REJECTED),
        )
    }

    /// 認証は通ったが利用可能なリソースがない
    pub fn inactive() -> Self {
        Self::new(
            VerificationStatus::Invalid,
            "API Key Inactive",
            Some(ICON_REJECTED),
        )
    }

    /// 必須補助フィールドが欠けている
    pub fn missing_requirement(message: impl Into<String>) -> Self {
        Self::new(VerificationStatus::Invalid, message, Some(ICON_REJECTED))
    }

    /// 接続失敗
    pub fn connection_error() -> Self {
        Self::error("Connection Error")
    }

    /// タイムアウト
    pub fn timeout_error() -> Self {
        Self::error("Timeout Error")
    }

    /// 判定を伴わないエラー
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(VerificationStatus::Error, message, None)
    }

    pub fn is_valid(&self) -> bool {
        self.status == VerificationStatus::Valid
    }
}
