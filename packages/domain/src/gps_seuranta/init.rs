//! `init.txt` のパース
//!
//! 1 行 1 レコードの `KEY:value` 形式。ここで使うのは次の 2 種類のみで、
//! それ以外のキー（`RACENAME`, `TIMEZONE` など）は読み飛ばす。
//!
//! ```text
//! CALIBRATION:lon1|lat1|x1|y1|lon2|lat2|x2|y2|lon3|lat3|x3|y3|
//! COMPETITOR:id|startDate|startTime|name|shortName
//! ```

use crate::{CalibrationPoint, Competitor, EventOverview, MapCalibration, TrackingError};

const FORMAT: &str = "GPS-Seuranta init.txt";

/// キャリブレーションに使う対応点の数
const CALIBRATION_POINTS: usize = 3;

/// `init.txt` を統一モデルに変換する
///
/// キャリブレーション行が壊れている場合は `map_calibration` を `None` にして続行する。
/// `CALIBRATION` も `COMPETITOR` も 1 行も無い場合は `init.txt` ではないと判断し、
/// エラーを返す（HTML のエラーページが 200 で返ってきた場合など）。
pub fn parse_init_data(text: &str) -> Result<EventOverview, TrackingError> {
    let mut map_calibration = None;
    let mut competitors = Vec::new();
    let mut recognized = false;

    for line in text.lines().map(str::trim) {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        match key {
            "CALIBRATION" => {
                recognized = true;
                map_calibration = parse_calibration(value);
            }
            "COMPETITOR" => {
                recognized = true;
                if let Some(competitor) = parse_competitor(value) {
                    competitors.push(competitor);
                }
            }
            _ => {}
        }
    }

    if !recognized {
        return Err(TrackingError::Format {
            format:  FORMAT,
            message: "CALIBRATION / COMPETITOR レコードがありません".to_string(),
        });
    }

    Ok(EventOverview {
        competitors,
        map_calibration,
    })
}

/// `lon|lat|x|y` の 4 値組を先頭から 3 組読む
fn parse_calibration(value: &str) -> Option<MapCalibration> {
    let numbers = value
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(CALIBRATION_POINTS * 4)
        .map(|s| s.parse::<f64>().ok())
        .collect::<Option<Vec<_>>>()?;

    if numbers.len() < CALIBRATION_POINTS * 4 {
        return None;
    }

    Some(
        numbers
            .chunks_exact(4)
            .map(|c| CalibrationPoint::new(c[1], c[0], c[2], c[3]))
            .collect(),
    )
}

/// `id|startDate|startTime|name|shortName`
fn parse_competitor(value: &str) -> Option<Competitor> {
    let fields: Vec<&str> = value.split('|').map(str::trim).collect();
    if fields.len() < 4 || fields[0].is_empty() {
        return None;
    }
    Some(Competitor::new(fields[0], fields[3]))
}
