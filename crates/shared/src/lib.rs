//! # KeyProbe 共有ユーティリティ
//!
//! ワークスペース全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 検証ロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は最小限に抑え、重い依存は feature で切り替える

pub mod health;
pub mod observability;

pub use health::HealthResponse;
