//! # 追跡データプロバイダ
//!
//! URL パスの `{provider}` セグメントを型に変換する。
//! 文字列比較の分岐ではなく列挙型にすることで、ハンドラの `match` が
//! 全プロバイダを網羅しているかをコンパイラが検査できる。

use strum::IntoStaticStr;

/// 対応しているライブ追跡プロバイダ
///
/// パスセグメントとの対応は kebab-case（`loggator` / `gps-seuranta`）。
/// 大文字小文字は区別する。
///
/// ```
/// use orientrack_domain::Provider;
///
/// assert_eq!("gps-seuranta".parse::<Provider>(), Ok(Provider::GpsSeuranta));
/// assert!("Loggator".parse::<Provider>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Provider {
    /// events.loggator.com
    Loggator,
    /// tulospalvelu.fi の GPS-Seuranta
    GpsSeuranta,
}
