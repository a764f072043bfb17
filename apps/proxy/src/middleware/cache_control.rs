//! # キャッシュ制御ミドルウェア
//!
//! 測位点は数秒ごとに増えるため、ブラウザや CDN が古いトラックを返さないよう
//! 全レスポンスに `Cache-Control: no-store` を付ける。
//! 転送した上流エラーや 404 / 500 も対象にする。

use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

/// ライブ追跡データのキャッシュを禁止する
pub async fn no_store(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}
