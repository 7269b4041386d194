//! # KeyProbe サーバーライブラリ
//!
//! API キー検証サーバーのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app`: ルーターとミドルウェアの組み立て
//! - `error`: ルート層のエラーとレスポンス変換
//! - `handler`: HTTP ハンドラ

pub mod app;
pub mod error;
pub mod handler;
