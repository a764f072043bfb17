//! GPS-Seuranta クライアント
//!
//! - `GET {base}/gps/{id}/init.txt` - 大会情報（競技者・キャリブレーション）
//! - `GET {base}/gps/{id}/data.lst` - 測位点

use async_trait::async_trait;
use orientrack_domain::{EventOverview, Tracks, gps_seuranta};

use super::{TrackingProviderClient, UpstreamError, response::read_success_body};

/// GPS-Seuranta クライアント実装
#[derive(Clone)]
pub struct GpsSeurantaClientImpl {
    base_url: String,
    client:   reqwest::Client,
}

impl GpsSeurantaClientImpl {
    /// 新しい GpsSeurantaClient を作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: GPS-Seuranta のベース URL（例: `https://www.tulospalvelu.fi`）
    /// - `client`: 共有する HTTP クライアント
    pub fn new(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn resource_url(&self, event_id: &str, resource: &str) -> String {
        format!(
            "{}/gps/{}/{}",
            self.base_url,
            urlencoding::encode(event_id),
            resource
        )
    }

    /// テキストリソースを取得する
    ///
    /// 本体は ISO-8859-1 で配信されることがあるため、UTF-8 として
    /// 不正なバイトは置換文字にする。
    async fn fetch_text(&self, event_id: &str, resource: &str) -> Result<String, UpstreamError> {
        let response = self
            .client
            .get(self.resource_url(event_id, resource))
            .send()
            .await?;
        let body = read_success_body(response).await?;

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[async_trait]
impl TrackingProviderClient for GpsSeurantaClientImpl {
    #[tracing::instrument(skip(self), fields(provider = "gps-seuranta"))]
    async fn get_event(&self, event_id: &str) -> Result<EventOverview, UpstreamError> {
        let text = self.fetch_text(event_id, "init.txt").await?;

        Ok(gps_seuranta::parse_init_data(&text)?)
    }

    #[tracing::instrument(skip(self), fields(provider = "gps-seuranta"))]
    async fn get_tracks(&self, event_id: &str) -> Result<Tracks, UpstreamError> {
        let text = self.fetch_text(event_id, "data.lst").await?;

        Ok(gps_seuranta::parse_data(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_リソースurlを組み立てる() {
        let client = GpsSeurantaClientImpl::new("https://www.tulospalvelu.fi", reqwest::Client::new());

        assert_eq!(
            client.resource_url("jukola2024", "init.txt"),
            "https://www.tulospalvelu.fi/gps/jukola2024/init.txt"
        );
        assert_eq!(
            client.resource_url("a/b", "data.lst"),
            "https://www.tulospalvelu.fi/gps/a%2Fb/data.lst"
        );
    }
}
