//! # 追跡データプロキシサーバー
//!
//! Loggator・GPS-Seuranta のライブ追跡データを統一形式で返す読み取り専用 API サーバー。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────────┐
//! │  Map client  │────▶│    Proxy     │────▶│ events.loggator.com  │
//! │              │     │  port: 4321  │     ├──────────────────────┤
//! └──────────────┘     └──────────────┘────▶│ www.tulospalvelu.fi  │
//!                                           └──────────────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `PROXY_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PROXY_PORT` | No | ポート番号（デフォルト: `4321`） |
//! | `LOGGATOR_URL` | No | Loggator のベース URL |
//! | `GPS_SEURANTA_URL` | No | GPS-Seuranta のベース URL |
//! | `UPSTREAM_TIMEOUT_SECS` | No | 上流リクエストのタイムアウト秒（デフォルト: `30`） |
//! | `LOG_FORMAT` | No | `json` / `pretty` |
//! | `RUST_LOG` | No | ログレベル |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p orientrack-proxy
//! ```

use std::net::SocketAddr;

use anyhow::Context as _;
use orientrack_proxy::{app_builder::build_app, config::ProxyConfig};
use orientrack_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// プロキシサーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env("proxy"));
    let _tracing_guard = tracing::info_span!("app", service = "proxy").entered();

    let config = ProxyConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        loggator_url = %config.loggator_url,
        gps_seuranta_url = %config.gps_seuranta_url,
        upstream_timeout_secs = config.upstream_timeout.as_secs(),
        "プロキシサーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let app = build_app(&config).context("HTTP クライアントの構築に失敗しました")?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("プロキシサーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
