//! # プロキシ設定
//!
//! 環境変数からプロキシサーバーの設定を読み込む。
//! 必須の変数は無く、未設定の項目はデフォルト値を使う。

use std::{env, num::ParseIntError, time::Duration};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4321;
const DEFAULT_LOGGATOR_URL: &str = "https://events.loggator.com";
const DEFAULT_GPS_SEURANTA_URL: &str = "https://www.tulospalvelu.fi";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 数値であるべき変数が数値でない
    #[error("{name} は数値である必要があります: {source}")]
    InvalidNumber {
        name:   &'static str,
        #[source]
        source: ParseIntError,
    },

    /// URL 変数が http(s) で始まらない
    #[error("{name} は http:// または https:// で始まる必要があります: {value}")]
    InvalidUrl { name: &'static str, value: String },
}

/// プロキシサーバーの設定
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyConfig {
    /// バインドアドレス
    pub host:             String,
    /// ポート番号
    pub port:             u16,
    /// Loggator API のベース URL
    pub loggator_url:     String,
    /// GPS-Seuranta のベース URL
    pub gps_seuranta_url: String,
    /// 上流サービスへのリクエストのタイムアウト
    pub upstream_timeout: Duration,
}

impl ProxyConfig {
    /// 環境変数から設定を読み込む
    ///
    /// | 変数名 | デフォルト |
    /// |--------|-----------|
    /// | `PROXY_HOST` | `0.0.0.0` |
    /// | `PROXY_PORT` | `4321` |
    /// | `LOGGATOR_URL` | `https://events.loggator.com` |
    /// | `GPS_SEURANTA_URL` | `https://www.tulospalvelu.fi` |
    /// | `UPSTREAM_TIMEOUT_SECS` | `30` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// テストでプロセスの環境変数を書き換えずに済むよう分離している。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PROXY_PORT") {
            Some(v) => v.trim().parse().map_err(|source| ConfigError::InvalidNumber {
                name: "PROXY_PORT",
                source,
            })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(v) => v.trim().parse().map_err(|source| ConfigError::InvalidNumber {
                name: "UPSTREAM_TIMEOUT_SECS",
                source,
            })?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self {
            host: lookup("PROXY_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            loggator_url: base_url(&lookup, "LOGGATOR_URL", DEFAULT_LOGGATOR_URL)?,
            gps_seuranta_url: base_url(&lookup, "GPS_SEURANTA_URL", DEFAULT_GPS_SEURANTA_URL)?,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn base_url(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: &str,
) -> Result<String, ConfigError> {
    let Some(value) = lookup(name) else {
        return Ok(default.to_string());
    };

    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl { name, value });
    }
    Ok(value.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_未設定のときデフォルト値を使う() {
        let config = ProxyConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(
            config,
            ProxyConfig {
                host:             "0.0.0.0".to_string(),
                port:             4321,
                loggator_url:     "https://events.loggator.com".to_string(),
                gps_seuranta_url: "https://www.tulospalvelu.fi".to_string(),
                upstream_timeout: Duration::from_secs(30),
            }
        );
    }

    #[test]
    fn test_環境変数の値で上書きし末尾のスラッシュを除く() {
        let config = ProxyConfig::from_lookup(lookup_from(&[
            ("PROXY_HOST", "127.0.0.1"),
            ("PROXY_PORT", "8080"),
            ("LOGGATOR_URL", "http://localhost:9000/"),
            ("GPS_SEURANTA_URL", "http://localhost:9001"),
            ("UPSTREAM_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.loggator_url, "http://localhost:9000");
        assert_eq!(config.gps_seuranta_url, "http://localhost:9001");
        assert_eq!(config.upstream_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_ポートが数値でなければエラー() {
        let result = ProxyConfig::from_lookup(lookup_from(&[("PROXY_PORT", "http")]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidNumber {
                name: "PROXY_PORT",
                ..
            })
        ));
    }

    #[test]
    fn test_タイムアウトが負数ならエラー() {
        let result = ProxyConfig::from_lookup(lookup_from(&[("UPSTREAM_TIMEOUT_SECS", "-1")]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidNumber {
                name: "UPSTREAM_TIMEOUT_SECS",
                ..
            })
        ));
    }

    #[test]
    fn test_スキームの無いurlはエラー() {
        let result = ProxyConfig::from_lookup(lookup_from(&[("LOGGATOR_URL", "events.loggator.com")]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidUrl {
                name: "LOGGATOR_URL",
                ..
            })
        ));
    }
}
