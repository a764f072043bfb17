//! Loggator 測位点のスキーマとトラックへの変換

use serde::Deserialize;

use super::DeviceId;
use crate::{TrackPoint, TrackingError, Tracks};

/// `GET /api/events/{id}/points` の本体
#[derive(Debug, Clone, Deserialize)]
pub struct LoggatorPoints {
    pub data: Vec<LoggatorPoint>,
}

/// 1 デバイスの 1 測位
#[derive(Debug, Clone, Deserialize)]
pub struct LoggatorPoint {
    pub device_id: DeviceId,
    pub latitude:  f64,
    pub longitude: f64,
    /// UNIX 時刻（秒）
    pub fix_time:  i64,
}

impl LoggatorPoints {
    /// レスポンス本体をスキーマ検証しつつデシリアライズする
    pub fn from_slice(body: &[u8]) -> Result<Self, TrackingError> {
        serde_json::from_slice(body).map_err(|e| TrackingError::schema("LoggatorPoints", e))
    }

    /// デバイス ID ごとに時刻順のトラックへまとめる
    pub fn into_tracks(self) -> Tracks {
        self.data
            .into_iter()
            .map(|p| {
                (
                    p.device_id.to_string(),
                    TrackPoint {
                        time: p.fix_time,
                        lat:  p.latitude,
                        lon:  p.longitude,
                    },
                )
            })
            .collect()
    }
}
