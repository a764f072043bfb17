//! Loggator イベントのスキーマとキャリブレーション導出

use serde::Deserialize;

use super::DeviceId;
use crate::{
    CalibrationPoint,
    Competitor,
    EventOverview,
    MapCalibration,
    TrackingError,
};

/// イベント本体
///
/// `map` は地図未設定のイベントで `{}` になるため、ここでは生の JSON のまま保持し、
/// [`LoggatorEvent::map_calibration`] で個別に検証する。
#[derive(Debug, Clone, Deserialize)]
pub struct LoggatorEvent {
    pub competitors: Vec<LoggatorCompetitor>,
    #[serde(default)]
    pub map:         serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggatorCompetitor {
    pub device_id: DeviceId,
    pub name:      String,
}

/// 地図ブロック
#[derive(Debug, Clone, Deserialize)]
pub struct LoggatorMap {
    pub coordinates: LoggatorCorners,
}

/// 地図画像の四隅の座標
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggatorCorners {
    pub top_left:     LatLng,
    pub top_right:    LatLng,
    pub bottom_left:  LatLng,
    pub bottom_right: LatLng,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LoggatorEvent {
    /// レスポンス本体をスキーマ検証しつつデシリアライズする
    pub fn from_slice(body: &[u8]) -> Result<Self, TrackingError> {
        serde_json::from_slice(body).map_err(|e| TrackingError::schema("LoggatorEvent", e))
    }

    /// 競技者をプロバイダの並び順のまま統一モデルに変換する
    pub fn competitors(&self) -> Vec<Competitor> {
        self.competitors
            .iter()
            .map(|c| Competitor::new(c.device_id.to_string(), c.name.clone()))
            .collect()
    }

    /// 地図ブロックからキャリブレーションを導出する
    ///
    /// 地図ブロックが `{}`・欠落・スキーマ不一致のいずれかなら `None`。
    /// イベント全体をエラーにはしない。
    pub fn map_calibration(&self) -> Option<MapCalibration> {
        LoggatorMap::deserialize(&self.map)
            .ok()
            .map(|map| map.calibration())
    }
}

impl From<&LoggatorEvent> for EventOverview {
    fn from(event: &LoggatorEvent) -> Self {
        Self {
            competitors:     event.competitors(),
            map_calibration: event.map_calibration(),
        }
    }
}

impl LoggatorMap {
    /// 四隅のうち 3 点から正規化座標のキャリブレーションを作る
    ///
    /// 左上 → (1, 1)、左下 → (1, -1)、右上 → (-1, 1) の順。右下は使わない。
    pub fn calibration(&self) -> MapCalibration {
        let corners = &self.coordinates;
        vec![
            corner_point(corners.top_left, 1.0, 1.0),
            corner_point(corners.bottom_left, 1.0, -1.0),
            corner_point(corners.top_right, -1.0, 1.0),
        ]
    }
}

fn corner_point(corner: LatLng, x: f64, y: f64) -> CalibrationPoint {
    CalibrationPoint::new(corner.lat, corner.lng, x, y)
}
