//! # Gemini 検証器
//!
//! `generateContent` で短いテキスト生成を 1 回行い、生成テキストが得られれば有効とする。
//! API キーはクエリパラメータ `key` で渡す。

use async_trait::async_trait;
use keyprobe_domain::{Credentials, Service, VerificationResult};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use super::{Verifier, normalize_base_url};
use crate::{
    error::ProbeError,
    probe::{HttpProbe, classify_status},
};

const PROBE_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// 空でない生成テキストを含むか
    fn has_text(&self) -> bool {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|c| &c.parts)
            .any(|p| p.text.as_deref().is_some_and(|t| !t.is_empty()))
    }
}

pub struct GeminiVerifier {
    http:     HttpProbe,
    base_url: String,
}

impl GeminiVerifier {
    pub fn new(http: HttpProbe, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: normalize_base_url(base_url),
        }
    }
}

#[async_trait]
impl Verifier for GeminiVerifier {
    fn service(&self) -> Service {
        Service::Gemini
    }

    async fn probe(&self, credentials: &Credentials) -> Result<VerificationResult, ProbeError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, PROBE_MODEL
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": "Test" }] }],
            "generationConfig": { "maxOutputTokens": 10, "temperature": 0.1 },
        });
        let request = self
            .http
            .client()
            .post(&url)
            .query(&[("key", credentials.api_key())])
            .json(&body);

        let response = self.http.send(request).await?;
        if response.status() != StatusCode::OK {
            return Ok(classify_status(response.status()));
        }

        let generated = response.json::<GenerateContentResponse>().await?;
        if generated.has_text() {
            Ok(VerificationResult::active())
        } else {
            Ok(VerificationResult::rejected())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_has_text_生成テキストがあればtrue() {
        let response =
            parse(r#"{"candidates":[{"content":{"parts":[{"text":"Hello"}],"role":"model"}}]}"#);
        assert!(response.has_text());
    }

    #[test]
    fn test_has_text_候補なしでfalse() {
        assert!(!parse(r#"{"candidates":[]}"#).has_text());
        assert!(!parse("{}").has_text());
    }

    #[test]
    fn test_has_text_空文字列のみでfalse() {
        let response = parse(r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#);
        assert!(!response.has_text());
    }

    #[test]
    fn test_has_text_contentなしの候補は無視する() {
        let response = parse(
            r#"{"candidates":[{"finishReason":"SAFETY"},{"content":{"parts":[{"text":"ok"}]}}]}"#,
        );
        assert!(response.has_text());
    }
}
