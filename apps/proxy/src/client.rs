//! # 上流プロバイダクライアント
//!
//! Loggator・GPS-Seuranta への HTTP 通信を担当する。
//!
//! どちらのクライアントも [`TrackingProviderClient`] を実装し、取得した本体を
//! `orientrack_domain` のパーサーで統一モデルに変換して返す。
//! ハンドラはプロバイダの違いを意識しない。

mod error;
mod gps_seuranta;
mod loggator;
mod response;

use std::time::Duration;

use async_trait::async_trait;
pub use error::UpstreamError;
pub use gps_seuranta::GpsSeurantaClientImpl;
pub use loggator::LoggatorClientImpl;
use orientrack_domain::{EventOverview, Tracks};

/// 上流へ送る User-Agent
const USER_AGENT: &str = concat!("orientrack-proxy/", env!("CARGO_PKG_VERSION"));

/// 追跡プロバイダクライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
/// 1 回の呼び出しで上流へのリクエストはちょうど 1 回（リトライしない）。
#[async_trait]
pub trait TrackingProviderClient: Send + Sync {
    /// イベント概要（競技者一覧と地図キャリブレーション）を取得する
    ///
    /// # 戻り値
    ///
    /// 上流が 2xx 以外を返した場合は `UpstreamError::Rejected`
    async fn get_event(&self, event_id: &str) -> Result<EventOverview, UpstreamError>;

    /// 競技者ごとのトラックを取得する
    async fn get_tracks(&self, event_id: &str) -> Result<Tracks, UpstreamError>;
}

/// 上流通信に共通で使う HTTP クライアントを構築する
///
/// `reqwest::Client` は内部でコネクションプールを持つため、1 つを全クライアントで共有する。
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}
