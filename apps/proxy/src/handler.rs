//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、形式の解釈はクライアントと `orientrack_domain` に委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `tracking`: イベント概要・トラックの取得

pub mod health;
pub mod tracking;

pub use health::health_check;
pub use tracking::{TrackingState, get_event, get_event_points};
