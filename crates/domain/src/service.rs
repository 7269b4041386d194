//! # 検証対象サービス
//!
//! 対応する 12 の外部サービスと、それぞれが要求する補助フィールドを定義する。
//!
//! サービス識別子は大文字小文字を区別せず完全一致で解釈する
//! （`"GitHub"` も `"github"` も [`Service::Github`]）。

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{IntoStaticStr, VariantArray};

use crate::{DomainError, credential::Credentials, verdict::VerificationResult};

/// 検証対象サービス
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoStaticStr,
    VariantArray,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Service {
    Openai,
    Anthropic,
    Cohere,
    Stripe,
    Github,
    Notion,
    Gemini,
    Firebase,
    Twitter,
    Spotify,
    Azure,
    Supabase,
}

impl Service {
    /// サービス識別子をパースする
    ///
    /// 前後の空白は呼び出し側で除去済みであることを前提とする。
    pub fn parse(identifier: &str) -> Result<Self, DomainError> {
        Self::from_str(identifier)
            .map_err(|_| DomainError::UnsupportedService(identifier.to_string()))
    }

    /// 識別子文字列（小文字）
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// サービス記述子を取得する
    pub fn descriptor(self) -> ServiceDescriptor {
        let (required, missing_message): (&'static [AuxField], _) = match self {
            Service::Twitter => (
                &[AuxField::ApiSecret],
                "API Key Invalid - Twitter Secret Required",
            ),
            Service::Spotify => (
                &[AuxField::ClientSecret],
                "API Key Invalid - Spotify Secret Required",
            ),
            Service::Azure => (
                &[AuxField::ClientSecret, AuxField::TenantId],
                "API Key Invalid - Azure Client Secret and Tenant ID Required",
            ),
            Service::Supabase => (
                &[AuxField::BaseUrl],
                "API Key Invalid - Supabase URL Required",
            ),
            _ => (&[], ""),
        };

        ServiceDescriptor {
            service: self,
            required,
            missing_message,
        }
    }
}

/// 補助フィールド
///
/// 一部のサービスが API キーに加えて要求する値。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum AuxField {
    /// Twitter の API シークレット
    ApiSecret,
    /// Spotify / Azure のクライアントシークレット
    ClientSecret,
    /// Azure のテナント ID
    TenantId,
    /// Supabase プロジェクトのベース URL
    BaseUrl,
}

/// サービス記述子
///
/// サービスと必須補助フィールドの対応を表す。実行時に保存されることはなく、
/// 検証前の前提条件チェックにのみ使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub service:         Service,
    pub required:        &'static [AuxField],
    pub missing_message: &'static str,
}

impl ServiceDescriptor {
    /// 必須補助フィールドが揃っているか確認する
    ///
    /// 1 つでも欠けていれば、サービス固有のメッセージを持つ `invalid` を返す。
    /// この場合、外部サービスへの通信は行わない。
    pub fn check_preconditions(&self, credentials: &Credentials) -> Result<(), VerificationResult> {
        let missing = self
            .required
            .iter()
            .any(|field| credentials.aux().get(*field).is_none());

        if missing {
            return Err(VerificationResult::missing_requirement(self.missing_message));
        }
        Ok(())
    }
}
