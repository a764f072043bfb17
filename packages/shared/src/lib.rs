//! # Orientrack 共有ユーティリティ
//!
//! プロキシサーバーとドメインクレートから共通で使うユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジック（プロバイダ形式の解析など）は含めない
//! - 重い依存は `observability` feature の背後に置く

pub mod health;
pub mod observability;

pub use health::HealthResponse;
