//! 上流クライアントのエラー型

use bytes::Bytes;
use orientrack_domain::TrackingError;
use reqwest::StatusCode;
use thiserror::Error;

/// 上流クライアントエラー
#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
    /// 上流が 2xx 以外を返した
    ///
    /// ステータスと本体はそのままクライアントへ転送する。
    #[error("上流が {status} を返しました")]
    Rejected {
        status:       StatusCode,
        content_type: Option<String>,
        body:         Bytes,
    },

    /// ネットワークエラー（接続失敗・タイムアウト・本体の読み込み失敗）
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// 2xx だが本体がプロバイダの形式に合わない
    #[error("不正なペイロード: {0}")]
    InvalidPayload(#[from] TrackingError),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Network(err.to_string())
    }
}
