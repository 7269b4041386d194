//! # KeyProbe ドメイン層
//!
//! API キー検証の中核となる型を定義する。
//!
//! ## 設計方針
//!
//! - **外部通信を持たない**: HTTP クライアントや検証ロジックは infra 層に置く
//! - **値オブジェクト**: 入力値は trim + 空チェック済みの Newtype で受け取る
//! - **静的な対応表**: 対応サービスとその必須補助フィールドはコンパイル時に決まる
//!
//! ## モジュール構成
//!
//! - [`service`]: 対応サービスの列挙とサービス記述子
//! - [`credential`]: 検証対象の認証情報（API キー + 補助シークレット）
//! - [`verdict`]: 検証結果（valid / invalid / error の三値）
//! - [`error`]: ドメイン層エラー

#[macro_use]
mod macros;

pub mod credential;
pub mod error;
pub mod service;
pub mod verdict;

pub use credential::{ApiKey, AuxiliarySecrets, Credentials};
pub use error::DomainError;
pub use service::{AuxField, Service, ServiceDescriptor};
pub use verdict::{VerificationResult, VerificationStatus};
