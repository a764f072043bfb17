//! Loggator クライアント
//!
//! - `GET {base}/api/events/{id}` - イベント（競技者・地図）
//! - `GET {base}/api/events/{id}/points` - 測位点

use async_trait::async_trait;
use orientrack_domain::{
    EventOverview,
    Tracks,
    loggator::{LoggatorEvent, LoggatorPoints},
};

use super::{TrackingProviderClient, UpstreamError, response::read_success_body};

/// Loggator クライアント実装
#[derive(Clone)]
pub struct LoggatorClientImpl {
    base_url: String,
    client:   reqwest::Client,
}

impl LoggatorClientImpl {
    /// 新しい LoggatorClient を作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: Loggator のベース URL（例: `https://events.loggator.com`）
    /// - `client`: 共有する HTTP クライアント
    pub fn new(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn event_url(&self, event_id: &str) -> String {
        format!(
            "{}/api/events/{}",
            self.base_url,
            urlencoding::encode(event_id)
        )
    }
}

#[async_trait]
impl TrackingProviderClient for LoggatorClientImpl {
    #[tracing::instrument(skip(self), fields(provider = "loggator"))]
    async fn get_event(&self, event_id: &str) -> Result<EventOverview, UpstreamError> {
        let response = self.client.get(self.event_url(event_id)).send().await?;
        let body = read_success_body(response).await?;

        let event = LoggatorEvent::from_slice(&body)?;
        Ok(EventOverview::from(&event))
    }

    #[tracing::instrument(skip(self), fields(provider = "loggator"))]
    async fn get_tracks(&self, event_id: &str) -> Result<Tracks, UpstreamError> {
        let url = format!("{}/points", self.event_url(event_id));

        let response = self.client.get(url).send().await?;
        let body = read_success_body(response).await?;

        Ok(LoggatorPoints::from_slice(&body)?.into_tracks())
    }
}
