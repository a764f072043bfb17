//! # アプリケーション構築
//!
//! クライアント・State の初期化とルーター構築を担当する。
//! `main.rs` はトレーシング初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, middleware::from_fn, routing::get};
use orientrack_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    client::{GpsSeurantaClientImpl, LoggatorClientImpl, build_http_client},
    config::ProxyConfig,
    handler::{TrackingState, get_event, get_event_points, health_check},
    middleware::no_store,
};

/// 設定から実クライアントを組み立て、ルーターを構築する
pub fn build_app(config: &ProxyConfig) -> Result<Router, reqwest::Error> {
    // 上流 2 社で HTTP クライアント（コネクションプール）を共有する
    let http_client = build_http_client(config.upstream_timeout)?;

    let tracking_state = Arc::new(TrackingState {
        loggator_client:     Arc::new(LoggatorClientImpl::new(
            &config.loggator_url,
            http_client.clone(),
        )),
        gps_seuranta_client: Arc::new(GpsSeurantaClientImpl::new(
            &config.gps_seuranta_url,
            http_client,
        )),
    });

    Ok(build_router(tracking_state))
}

/// State を受け取ってルーターを構築する
///
/// テストではスタブクライアントを詰めた State を渡す。
pub fn build_router(tracking_state: Arc<TrackingState>) -> Router {
    // レイヤー順序: 下に書いたものが外側
    // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
    // 2. TraceLayer: request_id を含むスパンを作る
    // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
    Router::new()
        .route("/health", get(health_check))
        .route("/tracking/{provider}/events/{event_id}", get(get_event))
        .route(
            "/tracking/{provider}/events/{event_id}/points",
            get(get_event_points),
        )
        .with_state(tracking_state)
        .layer(from_fn(no_store))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
