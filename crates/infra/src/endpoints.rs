//! # 外部サービスのベース URL
//!
//! 本番ではベンダーの公開ホストを使い、テストではモックサーバーに差し替える。
//! Supabase はプロジェクトごとに URL が異なるため、リクエストで受け取った値を使う。

/// 各サービスのベース URL（末尾スラッシュなし）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoints {
    pub openai:    String,
    pub anthropic: String,
    pub cohere:    String,
    pub stripe:    String,
    pub github:    String,
    pub notion:    String,
    pub gemini:    String,
    pub firebase:  String,
    pub twitter:   String,
    pub spotify:   String,
    pub azure:     String,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            openai:    "https://api.openai.com".to_string(),
            anthropic: "https://api.anthropic.com".to_string(),
            cohere:    "https://api.cohere.ai".to_string(),
            stripe:    "https://api.stripe.com".to_string(),
            github:    "https://api.github.com".to_string(),
            notion:    "https://api.notion.com".to_string(),
            gemini:    "https://generativelanguage.googleapis.com".to_string(),
            firebase:  "https://identitytoolkit.googleapis.com".to_string(),
            twitter:   "https://api.twitter.com".to_string(),
            spotify:   "https://accounts.spotify.com".to_string(),
            azure:     "https://login.microsoftonline.com".to_string(),
        }
    }
}

impl ProviderEndpoints {
    /// 全サービスを同じホストに向ける
    ///
    /// モックサーバー 1 台で全検証器をテストするときに使う。
    pub fn uniform(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        Self {
            openai:    base.clone(),
            anthropic: base.clone(),
            cohere:    base.clone(),
            stripe:    base.clone(),
            github:    base.clone(),
            notion:    base.clone(),
            gemini:    base.clone(),
            firebase:  base.clone(),
            twitter:   base.clone(),
            spotify:   base.clone(),
            azure:     base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniformは末尾スラッシュを除去する() {
        let endpoints = ProviderEndpoints::uniform("http://127.0.0.1:8080/");

        assert_eq!(endpoints.github, "http://127.0.0.1:8080");
        assert_eq!(endpoints.azure, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_defaultはhttpsの公開ホストを指す() {
        let endpoints = ProviderEndpoints::default();

        assert!(endpoints.openai.starts_with("https://"));
        assert!(!endpoints.stripe.ends_with('/'));
    }
}
