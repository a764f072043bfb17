//! 上流レスポンスの共通ハンドリング

use bytes::Bytes;

use super::error::UpstreamError;

/// 成功レスポンスなら本体を返し、それ以外は `Rejected` にする
///
/// 本体の解釈は呼び出し側（プロバイダ別のパーサー）が行う。
pub(super) async fn read_success_body(response: reqwest::Response) -> Result<Bytes, UpstreamError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.bytes().await?);
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    // 読み切れなかった本体を上流の応答として転送しない
    let body = response.bytes().await?;

    Err(UpstreamError::Rejected {
        status,
        content_type,
        body,
    })
}
