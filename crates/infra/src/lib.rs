//! # KeyProbe インフラ層
//!
//! 外部サービスへの問い合わせと、その結果の判定を担当する。
//!
//! ## 構成
//!
//! ```text
//! VerifierRegistry ──▶ dyn Verifier ──▶ HttpProbe ──▶ 外部サービス
//!   (識別子 → 検証器)    (12 実装)        (reqwest + タイムアウト)
//! ```
//!
//! - [`registry`]: サービス識別子から検証器を引く対応表
//! - [`verifier`]: サービスごとのリクエスト構築とレスポンス判定
//! - [`probe`]: 共通の HTTP 送信とステータスコード判定
//! - [`endpoints`]: 各サービスのベース URL（テストで差し替え可能）
//! - [`error`]: 通信エラーの型付き分類

pub mod endpoints;
pub mod error;
pub mod probe;
pub mod registry;
pub mod verifier;

pub use endpoints::ProviderEndpoints;
pub use error::ProbeError;
pub use probe::{DEFAULT_TIMEOUT, HttpProbe, classify_status};
pub use registry::VerifierRegistry;
pub use verifier::Verifier;
