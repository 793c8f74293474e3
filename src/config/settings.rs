//! Environment-driven server settings. `.env` loading is left to the binary.

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "postgresql:///biztime";
pub const TEST_DATABASE_URL: &str = "postgresql:///biztime_test";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 1;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// `DATABASE_URL`; falls back to the test database when `BIZTIME_ENV=test`.
    pub database_url: String,
    /// `BIND_ADDR`.
    pub bind_addr: SocketAddr,
    /// `DB_MAX_CONNECTIONS`. One connection mirrors a single shared client.
    pub max_connections: u32,
    /// `BODY_LIMIT_BYTES`.
    pub body_limit: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| {
            let is_test = get("BIZTIME_ENV").is_some_and(|env| env.eq_ignore_ascii_case("test"));
            if is_test {
                TEST_DATABASE_URL.to_string()
            } else {
                DEFAULT_DATABASE_URL.to_string()
            }
        });

        let bind_addr: SocketAddr = parse_or(
            "BIND_ADDR",
            get("BIND_ADDR"),
            DEFAULT_BIND_ADDR.parse().ok(),
        )?;
        let max_connections = parse_or(
            "DB_MAX_CONNECTIONS",
            get("DB_MAX_CONNECTIONS"),
            Some(DEFAULT_MAX_CONNECTIONS),
        )?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DB_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }
        let body_limit = parse_or(
            "BODY_LIMIT_BYTES",
            get("BODY_LIMIT_BYTES"),
            Some(DEFAULT_BODY_LIMIT_BYTES),
        )?;

        Ok(ServerConfig {
            database_url,
            bind_addr,
            max_connections,
            body_limit,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: Option<T>,
) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => default.ok_or(ConfigError::InvalidValue {
            key,
            value: String::new(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(cfg.max_connections, 1);
        assert_eq!(cfg.body_limit, DEFAULT_BODY_LIMIT_BYTES);
    }

    #[test]
    fn test_env_selects_test_database() {
        let cfg = config(&[("BIZTIME_ENV", "test")]).unwrap();
        assert_eq!(cfg.database_url, TEST_DATABASE_URL);
    }

    #[test]
    fn explicit_url_wins() {
        let cfg = config(&[
            ("BIZTIME_ENV", "test"),
            ("DATABASE_URL", "postgres://db/other"),
        ])
        .unwrap();
        assert_eq!(cfg.database_url, "postgres://db/other");
    }

    #[test]
    fn overrides_parse() {
        let cfg = config(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DB_MAX_CONNECTIONS", "4"),
            ("BODY_LIMIT_BYTES", "1024"),
        ])
        .unwrap();
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.max_connections, 4);
        assert_eq!(cfg.body_limit, 1024);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(config(&[("BIND_ADDR", "nowhere")]).is_err());
        assert!(config(&[("DB_MAX_CONNECTIONS", "many")]).is_err());
        assert!(config(&[("DB_MAX_CONNECTIONS", "0")]).is_err());
    }
}
