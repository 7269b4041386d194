//! # ルート層のエラーハンドリング
//!
//! `/verify` で検証器に到達する前に発生するエラーと、axum レスポンスへの変換。
//!
//! 画面側は常に判定形式の JSON を期待するため、これらのエラーも
//! HTTP 200 + `{status: "error", message}` で返す。
//! ハンドラ内の panic だけは HTTP 500 `Server Error` になる。

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use keyprobe_domain::{DomainError, VerificationResult};
use thiserror::Error;

/// `/verify` のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// API キーまたはサービスが未指定、もしくはボディを解釈できない
    #[error("API キーまたはサービスが指定されていません")]
    MissingCredential,

    /// 未対応のサービス識別子
    #[error("未対応のサービスです: {0}")]
    InvalidService(String),

    /// 入力値が制約を満たさない（長すぎるフィールドなど）
    #[error("入力値が不正です: {0}")]
    InvalidInput(String),
}

impl ApiError {
    /// 画面に表示するメッセージ
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::MissingCredential => "API Key Required",
            ApiError::InvalidService(_) => "Invalid Service",
            ApiError::InvalidInput(_) => "Invalid Input",
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnsupportedService(service) => ApiError::InvalidService(service),
            DomainError::Validation(detail) => ApiError::InvalidInput(detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::info!(error.kind = "request", "検証リクエストを受け付けませんでした: {}", self);
        (
            StatusCode::OK,
            Json(VerificationResult::error(self.message())),
        )
            .into_response()
    }
}

/// panic を `Server Error` レスポンスに変換する
///
/// `CatchPanicLayer::custom` に渡す。詳細はログにのみ出力し、レスポンスには含めない。
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };

    tracing::error!(
        error.category = "panic",
        "リクエスト処理中に panic が発生しました: {}",
        detail
    );

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(VerificationResult::error("Server Error")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use keyprobe_domain::VerificationStatus;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[rstest]
    #[case(ApiError::MissingCredential, "API Key Required")]
    #[case(ApiError::InvalidService("gitlab".to_string()), "Invalid Service")]
    #[case(ApiError::InvalidInput("too long".to_string()), "Invalid Input")]
    #[tokio::test]
    async fn test_api_errorは200の判定形式jsonで返す(
        #[case] err: ApiError,
        #[case] message: &str,
    ) {
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "status": "error", "message": message })
        );
    }

    #[test]
    fn test_未対応サービスのドメインエラーをinvalid_serviceに変換する() {
        let err: ApiError = DomainError::UnsupportedService("gitlab".to_string()).into();

        assert_eq!(err, ApiError::InvalidService("gitlab".to_string()));
    }

    #[tokio::test]
    async fn test_handle_panicは500で詳細を含めない() {
        let response = handle_panic(Box::new("secret detail".to_string()));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Server Error");
        assert!(!json.to_string().contains("secret detail"));
    }

    #[test]
    fn test_server_errorの判定はerror状態() {
        assert_eq!(
            VerificationResult::error("Server Error").status,
            VerificationStatus::Error
        );
    }
}
