//! # 統一追跡モデル
//!
//! プロバイダごとに異なる形式を、地図描画クライアントが扱う単一の JSON 形状に揃える。
//!
//! ## JSON 形状
//!
//! ```text
//! EventOverview  { "competitors": [Competitor], "mapCallibration": MapCalibration | null }
//! Competitor     { "id": "12", "name": "Anna" }
//! MapCalibration [ { "gps": { "lat", "lon" }, "point": { "x", "y" } }, ... ]
//! Tracks         { "<competitor id>": [ { "time", "lat", "lon" }, ... ], ... }
//! ```
//!
//! `mapCallibration` の綴りはクライアントとの既存契約であり、変更しない。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 追跡対象の競技者
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub id:   String,
    pub name: String,
}

impl Competitor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id:   id.into(),
            name: name.into(),
        }
    }
}

/// WGS84 座標
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsCoordinates {
    pub lat: f64,
    pub lon: f64,
}

/// 地図画像上の座標
///
/// Loggator 由来のキャリブレーションでは ±1 に正規化された座標、
/// GPS-Seuranta 由来ではピクセル座標になる。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

/// GPS 座標と地図座標の対応点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationPoint {
    pub gps:   GpsCoordinates,
    pub point: MapPoint,
}

impl CalibrationPoint {
    pub fn new(lat: f64, lon: f64, x: f64, y: f64) -> Self {
        Self {
            gps:   GpsCoordinates { lat, lon },
            point: MapPoint { x, y },
        }
    }
}

/// 地図キャリブレーション（順序付きの対応点列）
///
/// リクエストごとに導出され、保存はしない。
pub type MapCalibration = Vec<CalibrationPoint>;

/// イベント概要（イベントエンドポイントのレスポンス本体）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventOverview {
    pub competitors:     Vec<Competitor>,
    #[serde(rename = "mapCallibration")]
    pub map_calibration: Option<MapCalibration>,
}

/// 1 件の測位点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    /// UNIX 時刻（秒）
    pub time: i64,
    pub lat:  f64,
    pub lon:  f64,
}

/// 競技者 ID ごとの時系列トラック
///
/// JSON では競技者 ID をキーとするオブジェクトになる。
/// キー順を安定させるため `BTreeMap` を使う。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Tracks(BTreeMap<String, Vec<TrackPoint>>);

impl Tracks {
    pub fn new() -> Self {
        Self::default()
    }

    /// 測位点を競技者のトラックに追加する（並び替えは [`Tracks::sort_by_time`] で行う）
    pub fn push(&mut self, competitor_id: impl Into<String>, point: TrackPoint) {
        self.0.entry(competitor_id.into()).or_default().push(point);
    }

    /// 各トラックを時刻順に並べる
    ///
    /// 安定ソートのため、同時刻の点は入力順を保つ。
    pub fn sort_by_time(&mut self) {
        for points in self.0.values_mut() {
            points.sort_by_key(|p| p.time);
        }
    }

    pub fn get(&self, competitor_id: &str) -> Option<&[TrackPoint]> {
        self.0.get(competitor_id).map(Vec::as_slice)
    }

    /// トラックを持つ競技者の数
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn competitor_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<(String, TrackPoint)> for Tracks {
    fn from_iter<I: IntoIterator<Item = (String, TrackPoint)>>(iter: I) -> Self {
        let mut tracks = Tracks::new();
        for (competitor_id, point) in iter {
            tracks.push(competitor_id, point);
        }
        tracks.sort_by_time();
        tracks
    }
}
