//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `index`: 検証フォーム画面と静的スクリプト
//! - `verify`: API キー検証

pub mod health;
pub mod index;
pub mod verify;

pub use health::health_check;
pub use index::{index, main_js};
pub use verify::{VerifyFields, VerifyPayload, VerifyState, verify};
