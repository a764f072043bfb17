//! `data.lst` のパース
//!
//! 1 行が 1 競技者の測位点列で、`.` 区切り。先頭が競技者 ID
//! （`_` 以降はシーケンス番号なので捨てる）、以降が測位点。
//!
//! ```text
//! 12_3.563425660_1249500_6020000.B1G.C0F
//! ```
//!
//! 測位点は 2 種類ある。
//!
//! - 絶対値 `time_lon_lat`: 時刻は 2006-01-01T00:00:00Z からの秒、
//!   経度は 1/50000 度、緯度は 1/100000 度単位の整数
//! - 差分 3 文字: 直前の点からの時刻・経度・緯度の差分。各文字は
//!   ASCII 順の `0-9A-Za-z` での位置から 31 を引いた値（`0` = -31, `V` = 0, `z` = +30）
//!
//! 加算が `i64` の範囲を超える点は解釈できない点として読み飛ばす。

use crate::{TrackPoint, Tracks};

/// GPS-Seuranta の時刻原点（2006-01-01T00:00:00Z）の UNIX 時刻
const EPOCH_OFFSET: i64 = 1_136_073_600;

const LON_SCALE: f64 = 50_000.0;
const LAT_SCALE: f64 = 100_000.0;

const DELTA_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const DELTA_BIAS: i64 = 31;

/// 生の整数表現のまま累積し、出力時にだけ度へ変換する
#[derive(Debug, Clone, Copy)]
struct RawPoint {
    time: i64,
    lon:  i64,
    lat:  i64,
}

impl RawPoint {
    fn to_track_point(self) -> Option<TrackPoint> {
        Some(TrackPoint {
            time: self.time.checked_add(EPOCH_OFFSET)?,
            lat:  self.lat as f64 / LAT_SCALE,
            lon:  self.lon as f64 / LON_SCALE,
        })
    }
}

/// `data.lst` を競技者ごとのトラックに変換する
///
/// 解釈できない測位点は読み飛ばす。同じ競技者の行が複数あれば結合し、時刻順に並べる。
pub fn parse_data(text: &str) -> Tracks {
    text.lines()
        .flat_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Vec<(String, TrackPoint)> {
    let mut fields = line.trim().split('.');
    let competitor_id = match fields.next().map(|f| f.split('_').next().unwrap_or(f)) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => return Vec::new(),
    };

    let mut previous: Option<RawPoint> = None;
    let mut points = Vec::new();

    for field in fields {
        let decoded = if field.contains('_') {
            parse_absolute(field)
        } else {
            previous.and_then(|prev| parse_delta(field, prev))
        };

        let Some(point) = decoded else {
            continue;
        };
        if let Some(track_point) = point.to_track_point() {
            points.push((competitor_id.clone(), track_point));
            previous = Some(point);
        }
    }

    points
}

fn parse_absolute(field: &str) -> Option<RawPoint> {
    let mut parts = field.split('_').map(|p| p.parse::<i64>().ok());
    let point = RawPoint {
        time: parts.next()??,
        lon:  parts.next()??,
        lat:  parts.next()??,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(point)
}

fn parse_delta(field: &str, previous: RawPoint) -> Option<RawPoint> {
    let bytes = field.as_bytes();
    if bytes.len() != 3 {
        return None;
    }
    Some(RawPoint {
        time: previous.time.checked_add(delta_value(bytes[0])?)?,
        lon:  previous.lon.checked_add(delta_value(bytes[1])?)?,
        lat:  previous.lat.checked_add(delta_value(bytes[2])?)?,
    })
}

fn delta_value(c: u8) -> Option<i64> {
    DELTA_ALPHABET
        .iter()
        .position(|&a| a == c)
        .map(|index| index as i64 - DELTA_BIAS)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(b'0', -31)]
    #[case(b'9', -22)]
    #[case(b'A', -21)]
    #[case(b'U', -1)]
    #[case(b'V', 0)]
    #[case(b'W', 1)]
    #[case(b'Z', 4)]
    #[case(b'a', 5)]
    #[case(b'z', 30)]
    fn test_差分文字を符号付きの値に変換する(#[case] c: u8, #[case] expected: i64) {
        assert_eq!(delta_value(c), Some(expected));
    }

    #[test]
    fn test_アルファベット外の文字は変換できない() {
        assert_eq!(delta_value(b'-'), None);
        assert_eq!(delta_value(b'_'), None);
    }

    #[test]
    fn test_絶対値の測位点を度とunix時刻に変換する() {
        let tracks = parse_data("12.100_1245000_6020000\n");

        assert_eq!(
            tracks.get("12").unwrap(),
            &[TrackPoint {
                time: EPOCH_OFFSET + 100,
                lat:  60.2,
                lon:  24.9,
            }]
        );
    }

    #[test]
    fn test_差分の測位点を直前の点に累積する() {
        // W = +1, V = 0, U = -1
        let tracks = parse_data("12.100_1245000_6020000.WVU.WWV");

        let track = tracks.get("12").unwrap();
        assert_eq!(track.len(), 3);
        assert_eq!(track[1].time, EPOCH_OFFSET + 101);
        assert_eq!(track[1].lon, 1_245_000.0 / LON_SCALE);
        assert_eq!(track[1].lat, 6_019_999.0 / LAT_SCALE);
        assert_eq!(track[2].time, EPOCH_OFFSET + 102);
        assert_eq!(track[2].lon, 1_245_001.0 / LON_SCALE);
        assert_eq!(track[2].lat, 6_019_999.0 / LAT_SCALE);
    }

    #[test]
    fn test_シーケンス番号を除いた競技者idで行を結合し時刻順に並べる() {
        let text = "5_2.300_1245000_6020000\n5_1.200_1245000_6020000\n6.250_1245000_6020000\n";

        let tracks = parse_data(text);

        assert_eq!(tracks.len(), 2);
        let times: Vec<i64> = tracks.get("5").unwrap().iter().map(|p| p.time).collect();
        assert_eq!(times, vec![EPOCH_OFFSET + 200, EPOCH_OFFSET + 300]);
    }

    #[test]
    fn test_壊れた測位点は読み飛ばす() {
        // 先頭の差分は基準点が無い / 4 要素の絶対値 / 長さ違いの差分 / 範囲外の文字
        let text = "9.WVV.1_2_3_4.100_1245000_6020000.WV.W-V.WVV";

        let tracks = parse_data(text);

        let track = tracks.get("9").unwrap();
        assert_eq!(track.len(), 2);
        assert_eq!(track[0].time, EPOCH_OFFSET + 100);
        assert_eq!(track[1].time, EPOCH_OFFSET + 101);
    }

    #[test]
    fn test_測位点の無い行や空行はトラックを作らない() {
        let tracks = parse_data("\n\n42\n.100_1_1\n");

        assert!(tracks.is_empty());
    }

    #[test]
    fn test_大文字と小文字の差分はascii順で解釈する() {
        // a = +5, A = -21, z = +30
        let tracks = parse_data("3.1000_1245000_6020000.aAz");

        let track = tracks.get("3").unwrap();
        assert_eq!(track[1].time, EPOCH_OFFSET + 1005);
        assert_eq!(track[1].lon, 1_244_979.0 / LON_SCALE);
        assert_eq!(track[1].lat, 6_020_030.0 / LAT_SCALE);
    }

    #[test]
    fn test_時刻がi64の範囲を超える絶対値は読み飛ばす() {
        let tracks = parse_data("1.9223372036854775807_1_1");

        assert!(tracks.is_empty());
    }

    #[test]
    fn test_差分の加算が範囲を超える点は読み飛ばし直前の点を基準に続ける() {
        // 1 点目は i64::MAX - EPOCH_OFFSET なので unix 時刻には変換できる
        let max_time = i64::MAX - EPOCH_OFFSET;
        let text = format!("4.{max_time}_9223372036854775807_1.VzV.UVV");

        let tracks = parse_data(&text);

        let track = tracks.get("4").unwrap();
        assert_eq!(track.len(), 2);
        assert_eq!(track[0].time, i64::MAX - 1);
        assert_eq!(track[1].time, i64::MAX);
    }
}
