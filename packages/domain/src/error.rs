//! # ドメイン層エラー定義
//!
//! プロバイダから受け取ったペイロードが期待する形式でない場合のエラー。
//!
//! API 層ではどのバリアントも区別せず 500 に変換する。
//! バリアントはログで原因を追えるようにするためのもの。

use thiserror::Error;

/// 追跡データの検証・パースで発生するエラー
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackingError {
    /// JSON ペイロードがスキーマに一致しない
    ///
    /// `schema` には検証対象のスキーマ名（"LoggatorEvent" など）を入れる。
    #[error("{schema} のスキーマ検証に失敗しました: {message}")]
    Schema {
        schema:  &'static str,
        message: String,
    },

    /// テキスト形式のペイロードを解釈できない
    #[error("{format} の形式が不正です: {message}")]
    Format {
        format:  &'static str,
        message: String,
    },
}

impl TrackingError {
    pub(crate) fn schema(schema: &'static str, err: serde_json::Error) -> Self {
        Self::Schema {
            schema,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schemaエラーのメッセージにスキーマ名が含まれる() {
        let err = TrackingError::Schema {
            schema:  "LoggatorEvent",
            message: "missing field `competitors`".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("LoggatorEvent"), "{message}");
        assert!(message.contains("competitors"), "{message}");
    }
}
