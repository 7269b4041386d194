//! # ドメイン層エラー定義
//!
//! 入力値の検証失敗や未対応サービスの指定を表現するエラー型。
//!
//! ## エラーの種類と API レスポンスの対応
//!
//! | エラー種別 | レスポンス `message` |
//! |-----------|----------------------|
//! | `Validation` | `API Key Required` |
//! | `UnsupportedService` | `Invalid Service` |

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 必須フィールドの未入力、文字数制限の超過など。
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 対応していないサービス識別子
    #[error("未対応のサービスです: {0}")]
    UnsupportedService(String),
}
