//! # ヘルスチェックハンドラ
//!
//! `/health` は Liveness Check。外部サービスへは問い合わせず、常に `"healthy"` を返す。

use axum::Json;
use keyprobe_shared::HealthResponse;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy("API Key Validator is running"))
}
