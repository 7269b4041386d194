//! # API キー検証ハンドラ
//!
//! `POST /verify` でフォーム入力を受け取り、サービスに対応する検証器へ委譲する。
//!
//! ## 受け付けるボディ
//!
//! | Content-Type | 抽出方法 |
//! |--------------|----------|
//! | `application/json` | `Json` |
//! | `multipart/form-data` | `Multipart`（テキストフィールドのみ） |
//! | その他 | `Form`（`application/x-www-form-urlencoded`） |
//!
//! ボディを解釈できない場合は `API Key Required` として扱う。

use std::{fmt::Display, sync::Arc};

use axum::{
    Form,
    Json,
    extract::{FromRequest, Multipart, Request, State},
    http::header,
};
use keyprobe_domain::{ApiKey, AuxiliarySecrets, Credentials, VerificationResult};
use keyprobe_infra::VerifierRegistry;
use serde::Deserialize;

use crate::error::ApiError;

/// 検証ハンドラの共有状態
pub struct VerifyState {
    pub registry: VerifierRegistry,
}

/// 検証フォームの入力値
///
/// すべて任意項目として受け取り、必須チェックは [`VerifyFields::into_parts`] で行う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VerifyFields {
    pub api_key:       Option<String>,
    pub service:       Option<String>,
    pub api_secret:    Option<String>,
    pub client_secret: Option<String>,
    pub tenant_id:     Option<String>,
    pub supabase_url:  Option<String>,
}

impl VerifyFields {
    /// フィールド名で値を設定する（未知のフィールドは無視）
    fn set(&mut self, name: &str, value: String) {
        let slot = match name {
            "api_key" => &mut self.api_key,
            "service" => &mut self.service,
            "api_secret" => &mut self.api_secret,
            "client_secret" => &mut self.client_secret,
            "tenant_id" => &mut self.tenant_id,
            "supabase_url" => &mut self.supabase_url,
            _ => return,
        };
        *slot = Some(value);
    }

    /// サービス識別子と認証情報に分解する
    ///
    /// API キーとサービスは trim 後に空でないこと。
    pub fn into_parts(self) -> Result<(String, Credentials), ApiError> {
        let service = self
            .service
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ApiError::MissingCredential)?
            .to_string();
        let api_key = ApiKey::from_optional(self.api_key)?.ok_or(ApiError::MissingCredential)?;
        let aux = AuxiliarySecrets::from_fields(
            self.api_secret,
            self.client_secret,
            self.tenant_id,
            self.supabase_url,
        )?;

        Ok((service, Credentials::new(api_key, aux)))
    }
}

/// Content-Type に応じてボディから [`VerifyFields`] を抽出するエクストラクタ
pub struct VerifyPayload(pub VerifyFields);

impl<S> FromRequest<S> for VerifyPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let fields = if content_type.starts_with("application/json") {
            let Json(fields) = Json::<VerifyFields>::from_request(req, state)
                .await
                .map_err(undecodable)?;
            fields
        } else if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(undecodable)?;
            read_multipart(multipart).await?
        } else {
            let Form(fields) = Form::<VerifyFields>::from_request(req, state)
                .await
                .map_err(undecodable)?;
            fields
        };

        Ok(Self(fields))
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<VerifyFields, ApiError> {
    let mut fields = VerifyFields::default();
    while let Some(field) = multipart.next_field().await.map_err(undecodable)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field.text().await.map_err(undecodable)?;
        fields.set(&name, value);
    }
    Ok(fields)
}

fn undecodable(err: impl Display) -> ApiError {
    tracing::debug!("リクエストボディを解釈できません: {}", err);
    ApiError::MissingCredential
}

/// `POST /verify`
///
/// 判定は常に HTTP 200 で返す。通信エラーも判定の一種として扱う。
#[tracing::instrument(skip_all, fields(service = tracing::field::Empty))]
pub async fn verify(
    State(state): State<Arc<VerifyState>>,
    VerifyPayload(fields): VerifyPayload,
) -> Result<Json<VerificationResult>, ApiError> {
    let (service, credentials) = fields.into_parts()?;
    tracing::Span::current().record("service", service.as_str());

    let result = state.registry.dispatch(&service, &credentials).await?;

    tracing::info!(status = %result.status, "API キーを検証しました");
    Ok(Json(result))
}
