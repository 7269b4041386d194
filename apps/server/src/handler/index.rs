//! # 画面ハンドラ
//!
//! 検証フォームの HTML とスクリプトはバイナリに埋め込んで配信する。

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

const INDEX_HTML: &str = include_str!("../../static/index.html");
const MAIN_JS: &str = include_str!("../../static/js/main.js");

/// `GET /` 検証フォーム
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /static/js/main.js`
pub async fn main_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        MAIN_JS,
    )
}
