//! # サーバー設定
//!
//! 環境変数からサーバーの設定を読み込む。すべての変数にデフォルト値がある。

use std::{env, time::Duration};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 15;

/// 設定エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} は有効な数値である必要があります: {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} は 1 以上である必要があります")]
    NotPositive { name: &'static str },
}

/// サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// バインドアドレス
    pub host:          String,
    /// ポート番号
    pub port:          u16,
    /// 外部サービス呼び出しのタイムアウト
    pub probe_timeout: Duration,
}

impl ServerConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("KEYPROBE_HOST").ok().as_deref(),
            env::var("KEYPROBE_PORT").ok().as_deref(),
            env::var("PROBE_TIMEOUT_SECS").ok().as_deref(),
        )
    }

    /// 変数値から設定を組み立てる
    ///
    /// 空文字列は未設定として扱う。
    fn from_values(
        host: Option<&str>,
        port: Option<&str>,
        timeout_secs: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let host = non_empty(host).unwrap_or(DEFAULT_HOST).to_string();
        let port = parse_number("KEYPROBE_PORT", port, DEFAULT_PORT)?;
        let timeout_secs =
            parse_number("PROBE_TIMEOUT_SECS", timeout_secs, DEFAULT_PROBE_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::NotPositive {
                name: "PROBE_TIMEOUT_SECS",
            });
        }

        Ok(Self {
            host,
            port,
            probe_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_number<T: std::str::FromStr>(
    name: &'static str,
    value: Option<&str>,
    default: T,
) -> Result<T, ConfigError> {
    match non_empty(value) {
        None => Ok(default),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidNumber {
            name,
            value: v.to_string(),
        }),
    }
}
