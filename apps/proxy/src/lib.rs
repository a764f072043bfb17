//! # Orientrack プロキシ ライブラリ
//!
//! オリエンテーリング大会のライブ追跡プロバイダ（Loggator / GPS-Seuranta）の
//! データを、地図描画クライアント向けの統一 JSON に変換する読み取り専用プロキシ。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーター構築
//! - `client`: 上流プロバイダクライアント
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラーのレスポンス変換
//! - `handler`: HTTP ハンドラ
//! - `middleware`: ミドルウェア（キャッシュ制御）

pub mod app_builder;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
