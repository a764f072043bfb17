//! # GPS-Seuranta
//!
//! tulospalvelu.fi の GPS-Seuranta が配信するテキスト形式のパーサー。
//!
//! - [`parse_init_data`]: `init.txt`（大会情報・キャリブレーション・競技者一覧）
//! - [`parse_data`]: `data.lst`（競技者ごとの測位点列）

mod data;
mod init;

pub use data::parse_data;
pub use init::parse_init_data;
