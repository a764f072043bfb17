//! # ヘルスチェックハンドラ
//!
//! `/health`: Liveness Check（常に `"healthy"` を返す）。
//! 上流プロバイダは第三者のサービスなので Readiness の判定には使わない。

use axum::Json;
use orientrack_shared::HealthResponse;

/// プロキシのヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
