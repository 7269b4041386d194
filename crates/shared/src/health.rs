//! # ヘルスチェック共通型
//!
//! ヘルスチェックエンドポイントが返すレスポンス型を提供する。

use serde::{Deserialize, Serialize};

/// ヘルスチェックレスポンス
///
/// ## 使用例
///
/// ```
/// use keyprobe_shared::HealthResponse;
///
/// let response = HealthResponse::healthy("API Key Validator is running");
/// assert_eq!(response.status, "healthy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 稼働状態（`"healthy"`）
    pub status:  String,
    /// 人間向けの説明
    pub message: String,
}

impl HealthResponse {
    /// 稼働中を示すレスポンスを作成する
    pub fn healthy(message: impl Into<String>) -> Self {
        Self {
            status:  "healthy".to_string(),
            message: message.into(),
        }
    }
}
