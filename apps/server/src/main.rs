//! # KeyProbe サーバー
//!
//! API キーを 1 回の外部リクエストで検証する Web サーバー。
//!
//! ## エンドポイント
//!
//! - `GET /` 検証フォーム
//! - `POST /verify` API キー検証
//! - `GET /health` ヘルスチェック
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `KEYPROBE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `KEYPROBE_PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `PROBE_TIMEOUT_SECS` | No | 外部サービス呼び出しのタイムアウト秒数（デフォルト: `15`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p keyprobe-server
//!
//! KEYPROBE_PORT=8080 LOG_FORMAT=json cargo run -p keyprobe-server --release
//! ```

mod config;

use std::net::SocketAddr;

use anyhow::Context as _;
use config::ServerConfig;
use keyprobe_infra::{HttpProbe, ProviderEndpoints, VerifierRegistry};
use keyprobe_server::app::build_router;
use keyprobe_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// サーバーのエントリーポイント
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. 設定の読み込み
/// 4. 検証器レジストリとルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let _tracing_guard = init_tracing(&TracingConfig::from_env("keyprobe-server")).entered();

    let config = ServerConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "KeyProbe サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let http = HttpProbe::new(config.probe_timeout)
        .context("HTTP クライアントの初期化に失敗しました")?;
    let registry = VerifierRegistry::with_defaults(&http, &ProviderEndpoints::default());
    tracing::info!(
        services = registry.len(),
        timeout_secs = config.probe_timeout.as_secs(),
        "検証器を登録しました"
    );

    let app = build_router(registry);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("KeyProbe サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
