//! # HTTP プローブ
//!
//! 全検証器が共有する HTTP クライアントと、ステータスコードの共通判定。

use std::time::Duration;

use keyprobe_domain::VerificationResult;
use reqwest::StatusCode;

use crate::error::ProbeError;

/// 外部サービス呼び出しのデフォルトタイムアウト
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// 送信する User-Agent（GitHub API は User-Agent なしのリクエストを拒否する）
const USER_AGENT: &str = concat!("keyprobe/", env!("CARGO_PKG_VERSION"));

/// 外部サービスへリクエストを送る共有クライアント
///
/// `reqwest::Client` は内部でコネクションプールを `Arc` で共有するため、
/// clone して各検証器に渡してよい。
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    /// タイムアウト付きのクライアントを作成する
    pub fn new(timeout: Duration) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ProbeError::InvalidRequest(e.to_string()))?;

        Ok(Self { client })
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// リクエストを 1 回送信する（リトライしない）
    pub async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ProbeError> {
        let response = request.send().await?;
        // URL はクエリにキーを含む場合があるため出力しない
        tracing::debug!(
            http.status = response.status().as_u16(),
            "外部サービスが応答しました"
        );
        Ok(response)
    }
}

/// ステータスコードから判定する
///
/// | ステータス | 判定 |
/// |-----------|------|
/// | 200 | valid |
/// | 401, 403 | invalid |
/// | 429 | invalid（レート制限） |
/// | その他 | invalid |
pub fn classify_status(status: StatusCode) -> VerificationResult {
    match status {
        StatusCode::OK => VerificationResult::active(),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => VerificationResult::rejected(),
        StatusCode::TOO_MANY_REQUESTS => VerificationResult::rate_limited(),
        _ => VerificationResult::rejected(),
    }
}
