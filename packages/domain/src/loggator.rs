//! # Loggator
//!
//! events.loggator.com の JSON API のスキーマと、統一モデルへの変換。
//!
//! - [`LoggatorEvent`]: `GET /api/events/{id}` の本体
//! - [`LoggatorMap`]: イベントの `map` ブロック（地図の四隅の座標）
//! - [`LoggatorPoints`]: `GET /api/events/{id}/points` の本体

mod event;
mod points;

use std::fmt;

use serde::Deserialize;

pub use event::{LatLng, LoggatorCompetitor, LoggatorCorners, LoggatorEvent, LoggatorMap};
pub use points::{LoggatorPoint, LoggatorPoints};

/// Loggator のデバイス ID
///
/// 数値と文字列のどちらでも届くため両方受け付け、統一モデルでは文字列として扱う。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DeviceId {
    Number(i64),
    Text(String),
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceId::Number(n) => write!(f, "{n}"),
            DeviceId::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_数値と文字列のデバイスidを同じ表記にする() {
        let number: DeviceId = serde_json::from_str("42").unwrap();
        let text: DeviceId = serde_json::from_str("\"42\"").unwrap();

        assert_eq!(number.to_string(), "42");
        assert_eq!(text.to_string(), "42");
    }
}
