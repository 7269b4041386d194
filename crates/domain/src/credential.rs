//! # 認証情報
//!
//! 検証リクエストで受け取る API キーと補助シークレットを表現する。
//!
//! すべての値は trim 済みで、空白のみの補助フィールドは未指定として扱う。
//! シークレット系の値は `Debug` 出力がマスクされる。

use crate::{DomainError, service::AuxField};

/// 文字列フィールドの最大長
const MAX_FIELD_LENGTH: usize = 4096;

define_credential_string! {
    /// 検証対象の主クレデンシャル（API キー、トークン、クライアント ID など）
    pub struct ApiKey {
        label: "API キー",
        max_length: MAX_FIELD_LENGTH,
        secret: true,
    }
}

define_credential_string! {
    /// 補助シークレット（API シークレット、クライアントシークレット）
    pub struct SecretValue {
        label: "シークレット",
        max_length: MAX_FIELD_LENGTH,
        secret: true,
    }
}

define_credential_string! {
    /// 補助フィールドのうち秘匿不要な値（テナント ID、ベース URL）
    pub struct PlainValue {
        label: "補助フィールド",
        max_length: MAX_FIELD_LENGTH,
    }
}

/// 補助シークレット一式
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuxiliarySecrets {
    api_secret:    Option<SecretValue>,
    client_secret: Option<SecretValue>,
    tenant_id:     Option<PlainValue>,
    base_url:      Option<PlainValue>,
}

impl AuxiliarySecrets {
    /// フォーム入力から生成する
    ///
    /// 未指定・空白のみのフィールドは `None` として扱う。
    pub fn from_fields(
        api_secret: Option<String>,
        client_secret: Option<String>,
        tenant_id: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            api_secret:    SecretValue::from_optional(api_secret)?,
            client_secret: SecretValue::from_optional(client_secret)?,
            tenant_id:     PlainValue::from_optional(tenant_id)?,
            base_url:      PlainValue::from_optional(base_url)?,
        })
    }

    /// 指定フィールドの値を取得する
    pub fn get(&self, field: AuxField) -> Option<&str> {
        match field {
            AuxField::ApiSecret => self.api_secret.as_ref().map(SecretValue::as_str),
            AuxField::ClientSecret => self.client_secret.as_ref().map(SecretValue::as_str),
            AuxField::TenantId => self.tenant_id.as_ref().map(PlainValue::as_str),
            AuxField::BaseUrl => self.base_url.as_ref().map(PlainValue::as_str),
        }
    }
}

/// 1 回の検証で使う認証情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: ApiKey,
    aux:     AuxiliarySecrets,
}

impl Credentials {
    pub fn new(api_key: ApiKey, aux: AuxiliarySecrets) -> Self {
        Self { api_key, aux }
    }

    pub fn api_key(&self) -> &str {
        self.api_key.as_str()
    }

    pub fn aux(&self) -> &AuxiliarySecrets {
        &self.aux
    }

    /// 補助フィールドを取得する
    ///
    /// 前提条件チェック（[`crate::ServiceDescriptor::check_preconditions`]）
    /// 通過後に呼ぶ想定のため、欠落時は空文字列を返す。
    pub fn aux_or_empty(&self, field: AuxField) -> &str {
        self.aux.get(field).unwrap_or_default()
    }
}
