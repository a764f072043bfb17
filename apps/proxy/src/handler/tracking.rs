//! # 追跡データハンドラ
//!
//! プロバイダ別の上流データを統一形式で返す。
//!
//! ## エンドポイント
//!
//! - `GET /tracking/{provider}/events/{event_id}` - 競技者一覧と地図キャリブレーション
//! - `GET /tracking/{provider}/events/{event_id}/points` - 競技者ごとのトラック
//!
//! `provider` は `loggator` / `gps-seuranta`。それ以外は 404。

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Response,
};
use orientrack_domain::Provider;

use crate::{
    client::TrackingProviderClient,
    error::{json_response, log_and_convert_upstream_error, not_found_response},
};

/// 追跡データハンドラの State
pub struct TrackingState {
    pub loggator_client:     Arc<dyn TrackingProviderClient>,
    pub gps_seuranta_client: Arc<dyn TrackingProviderClient>,
}

impl TrackingState {
    /// プロバイダに対応するクライアントを返す
    fn client(&self, provider: Provider) -> &dyn TrackingProviderClient {
        match provider {
            Provider::Loggator => self.loggator_client.as_ref(),
            Provider::GpsSeuranta => self.gps_seuranta_client.as_ref(),
        }
    }
}

/// GET /tracking/{provider}/events/{event_id}
///
/// イベントの競技者一覧と地図キャリブレーションを取得する
pub async fn get_event(
    State(state): State<Arc<TrackingState>>,
    Path((provider, event_id)): Path<(String, String)>,
) -> Response {
    let Ok(provider) = provider.parse::<Provider>() else {
        return not_found_response();
    };

    match state.client(provider).get_event(&event_id).await {
        Ok(overview) => json_response(&overview),
        Err(e) => log_and_convert_upstream_error("イベント取得", provider, e),
    }
}

/// GET /tracking/{provider}/events/{event_id}/points
///
/// 競技者ごとのトラックを取得する
pub async fn get_event_points(
    State(state): State<Arc<TrackingState>>,
    Path((provider, event_id)): Path<(String, String)>,
) -> Response {
    let Ok(provider) = provider.parse::<Provider>() else {
        return not_found_response();
    };

    match state.client(provider).get_tracks(&event_id).await {
        Ok(tracks) => json_response(&tracks),
        Err(e) => log_and_convert_upstream_error("トラック取得", provider, e),
    }
}
