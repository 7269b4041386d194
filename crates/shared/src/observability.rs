//! # Observability 基盤
//!
//! トレーシング初期化、ログ出力形式の設定、HTTP リクエストの Request ID と
//! スパン生成を提供する。
//!
//! 環境変数 `LOG_FORMAT` による JSON / Pretty 出力の切り替えに対応する。

/// Request ID を運ぶ HTTP ヘッダー名
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_LOG_FILTER: &str = "info,keyprobe=debug";

/// ログ出力形式（環境変数 `LOG_FORMAT`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 行 1 イベントの JSON
    Json,
    #[default]
    Pretty,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(s.to_string()),
        }
    }
}

impl LogFormat {
    /// 変数値からログ形式を決める
    ///
    /// 未設定は `Pretty`。解釈できない値も `Pretty` にし、stderr に警告を出す
    /// （トレーシング初期化前のため `tracing` は使えない）。
    pub fn from_value(value: Option<&str>) -> Self {
        match value.map(str::parse::<Self>) {
            None => Self::default(),
            Some(Ok(format)) => format,
            Some(Err(other)) => {
                eprintln!("WARNING: LOG_FORMAT={other:?} is not json/pretty, using pretty");
                Self::default()
            }
        }
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// `app` スパンの `service` フィールドに入る名前
    pub service_name: String,
    pub log_format:   LogFormat,
}

impl TracingConfig {
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
        }
    }

    /// `LOG_FORMAT` を読んで設定を作る
    pub fn from_env(service_name: impl Into<String>) -> Self {
        let log_format = LogFormat::from_value(std::env::var("LOG_FORMAT").ok().as_deref());
        Self::new(service_name, log_format)
    }
}

/// トレーシングを初期化し、プロセス全体を包む `app` スパンを返す
///
/// 呼び出し側は戻り値を `entered()` して保持する。main スレッドの起動・停止ログに
/// `service` フィールドが付く。フィルタは `RUST_LOG`、未設定なら [`DEFAULT_LOG_FILTER`]。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) -> tracing::Span {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info_span!("app", service = %config.service_name)
}

/// UUID v7 の Request ID を生成する `MakeRequestId` 実装
///
/// クライアントが `x-request-id` を送ってきた場合は `SetRequestIdLayer` が
/// その値を優先するため、ここが呼ばれるのはヘッダーがないときのみ。
#[cfg(feature = "observability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

#[cfg(feature = "observability")]
impl tower_http::request_id::MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(
        &mut self,
        _request: &http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let value = http::HeaderValue::from_str(&uuid::Uuid::now_v7().to_string()).ok()?;
        Some(tower_http::request_id::RequestId::new(value))
    }
}

/// HTTP リクエストごとのスパンを作成する
///
/// `TraceLayer::make_span_with` に渡す。`method`, `uri`, `request_id` を
/// スパンフィールドとして持つため、ハンドラ内のログすべてに自動で付与される。
#[cfg(feature = "observability")]
pub fn make_request_span<B>(request: &http::Request<B>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
