//! # Orientrack ドメイン層
//!
//! オリエンテーリング大会のライブ GPS 追跡データを表現する型と、
//! 各プロバイダ固有のワイヤ形式をその型へ変換するパーサーを提供する。
//!
//! ## モジュール構成
//!
//! - [`tracking`]: プロバイダ非依存の統一モデル（競技者、地図キャリブレーション、トラック）
//! - [`provider`]: 対応プロバイダの列挙
//! - [`loggator`]: Loggator の JSON スキーマと統一モデルへの変換
//! - [`gps_seuranta`]: GPS-Seuranta のテキスト形式（`init.txt` / `data.lst`）のパーサー
//! - [`error`]: パース・検証エラー
//!
//! ## 設計方針
//!
//! - HTTP や非同期ランタイムに依存しない純粋な変換のみを置く
//! - 入力の一部が壊れていても可能な範囲で結果を返す（キャリブレーションは `None`、
//!   壊れた測位点はスキップ）。全体として解釈できない場合のみエラーにする

pub mod error;
pub mod gps_seuranta;
pub mod loggator;
pub mod provider;
pub mod tracking;

pub use error::TrackingError;
pub use provider::Provider;
pub use tracking::{
    CalibrationPoint,
    Competitor,
    EventOverview,
    GpsCoordinates,
    MapCalibration,
    MapPoint,
    TrackPoint,
    Tracks,
};
