//! # プロキシのエラーハンドリング
//!
//! 上流エラーとローカルエラーを axum レスポンスに変換する。
//!
//! | 分類 | レスポンス |
//! |------|-----------|
//! | 上流が 2xx 以外を返した | 上流のステータスと本体をそのまま転送（CORS ヘッダーを付与） |
//! | ネットワーク・ペイロード不正・シリアライズ失敗 | 500、本体なし |
//! | 未対応のプロバイダ | 404、本体なし |
//!
//! 500 の本体には診断情報を含めない。原因はログにのみ出力する。

use axum::{
    body::Body,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use orientrack_domain::Provider;
use serde::Serialize;

use crate::client::UpstreamError;

// --- IntoResponse for UpstreamError ---

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        match self {
            UpstreamError::Rejected {
                status,
                content_type,
                body,
            } => {
                let mut response = Response::new(Body::from(body));
                *response.status_mut() = status;
                if let Some(value) = content_type.and_then(|v| HeaderValue::from_str(&v).ok()) {
                    response.headers_mut().insert(header::CONTENT_TYPE, value);
                }
                with_cors(response)
            }
            UpstreamError::Network(_) | UpstreamError::InvalidPayload(_) => {
                internal_error_response()
            }
        }
    }
}

/// 上流エラーをログ付きでレスポンスに変換する
///
/// `Network`/`InvalidPayload` の場合はコンテキスト付きで `tracing::error!` を出力する。
/// `Rejected` は上流の正常な応答なので `warn` に留める。
pub fn log_and_convert_upstream_error(
    context: &str,
    provider: Provider,
    err: UpstreamError,
) -> Response {
    match &err {
        UpstreamError::Rejected { status, .. } => {
            tracing::warn!(
                provider = %provider,
                upstream.status = status.as_u16(),
                "{}で上流がエラーを返しました",
                context
            );
        }
        UpstreamError::Network(_) => {
            tracing::error!(
                error.category = "external_service",
                error.kind = "service_communication",
                provider = %provider,
                "{}で内部エラー: {}",
                context,
                err
            );
        }
        UpstreamError::InvalidPayload(_) => {
            tracing::error!(
                error.category = "external_service",
                error.kind = "invalid_payload",
                provider = %provider,
                "{}で内部エラー: {}",
                context,
                err
            );
        }
    }
    err.into_response()
}

// --- レスポンスヘルパー ---

/// 200 の JSON レスポンス
///
/// シリアライズに失敗した場合は 500。
pub fn json_response<T: Serialize>(value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => {
            let mut response = Response::new(Body::from(body));
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
            with_cors(response)
        }
        Err(e) => {
            tracing::error!(
                error.category = "internal",
                error.kind = "serialization",
                "レスポンスのシリアライズに失敗: {}",
                e
            );
            internal_error_response()
        }
    }
}

/// 404 レスポンス（本体なし）
pub fn not_found_response() -> Response {
    StatusCode::NOT_FOUND.into_response()
}

/// 500 レスポンス（本体なし）
pub fn internal_error_response() -> Response {
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

/// `Access-Control-Allow-Origin: *` を付与する
///
/// 上流が同名ヘッダーを返していても上書きする。
fn with_cors(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use bytes::Bytes;
    use orientrack_domain::TrackingError;

    use super::*;

    async fn body_bytes(response: Response) -> Bytes {
        to_bytes(response.into_body(), usize::MAX).await.unwrap()
    }

    #[tokio::test]
    async fn test_rejectedは上流のステータスと本体を転送しcorsを付与する() {
        let err = UpstreamError::Rejected {
            status:       StatusCode::IM_A_TEAPOT,
            content_type: Some("text/plain".to_string()),
            body:         Bytes::from_static(b"short and stout"),
        };

        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(body_bytes(response).await.as_ref(), b"short and stout");
    }

    #[tokio::test]
    async fn test_networkは本体なしの500() {
        let response = UpstreamError::Network("connection refused".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_payloadは本体なしの500() {
        let err = UpstreamError::InvalidPayload(TrackingError::Format {
            format:  "test",
            message: "broken".to_string(),
        });

        let response = log_and_convert_upstream_error("テスト", Provider::GpsSeuranta, err);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_json_responseはcontent_typeとcorsを付与する() {
        let response = json_response(&serde_json::json!({ "ok": true }));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(body_bytes(response).await.as_ref(), br#"{"ok":true}"#);
    }
}
