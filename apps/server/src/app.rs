//! # アプリケーション構築
//!
//! ルーターとミドルウェアを組み立てる。`main.rs` は設定読み込みとサーバー起動に集中し、
//! 統合テストは同じルーターに対してスタブの検証器を注入する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use keyprobe_infra::VerifierRegistry;
use keyprobe_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    error::handle_panic,
    handler::{VerifyState, health_check, index, main_js, verify},
};

/// ルーターを構築する
///
/// レイヤーは外側から Request ID 付与 → トレース → Request ID 伝播 → panic 捕捉の順。
/// panic による 500 もトレースと Request ID の対象になる。
pub fn build_router(registry: VerifierRegistry) -> Router {
    let verify_state = Arc::new(VerifyState { registry });

    Router::new()
        .route("/verify", post(verify))
        .with_state(verify_state)
        .route("/", get(index))
        .route("/static/js/main.js", get(main_js))
        .route("/health", get(health_check))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
