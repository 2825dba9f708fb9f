//! Application configuration loaded from environment.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use sqlx::mysql::MySqlConnectOptions;

/// Application configuration loaded from `.env` and environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address, `0.0.0.0:$PORT`.
    pub server_addr: SocketAddr,
    /// MySQL connection settings.
    pub database: DbConfig,
    /// Request body limit for multipart uploads, in bytes.
    pub max_upload_bytes: usize,
    /// Log level: `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

/// MySQL connection settings (`DB_*` variables).
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DbConfig {
    /// Connect options for the pool. Nothing is opened until a statement runs.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);
        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }
}

impl Config {
    /// Load configuration from environment. Call `dotenvy::dotenv().ok()` before this.
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port: u16 = var("PORT", "3000")
            .parse()
            .map_err(|_| ConfigLoadError::InvalidNumber("PORT"))?;
        let server_addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));

        let database = DbConfig {
            host: var("DB_HOST", "localhost"),
            port: var("DB_PORT", "3306")
                .parse()
                .map_err(|_| ConfigLoadError::InvalidNumber("DB_PORT"))?,
            user: var("DB_USER", "root"),
            password: var("DB_PASSWORD", ""),
            name: var("DB_NAME", "sections"),
            max_connections: var("DB_MAX_CONNECTIONS", "10")
                .parse()
                .map_err(|_| ConfigLoadError::InvalidNumber("DB_MAX_CONNECTIONS"))?,
            acquire_timeout: Duration::from_secs(
                var("DB_ACQUIRE_TIMEOUT_SECS", "5")
                    .parse()
                    .map_err(|_| ConfigLoadError::InvalidNumber("DB_ACQUIRE_TIMEOUT_SECS"))?,
            ),
        };
        if database.max_connections == 0 {
            return Err(ConfigLoadError::InvalidNumber("DB_MAX_CONNECTIONS"));
        }

        let max_upload_bytes = var("MAX_UPLOAD_BYTES", "10485760")
            .parse()
            .map_err(|_| ConfigLoadError::InvalidNumber("MAX_UPLOAD_BYTES"))?;
        let log_level = var("LOG_LEVEL", "info");

        Ok(Self {
            server_addr,
            database,
            max_upload_bytes,
            log_level,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Invalid {0}: expected a positive number")]
    InvalidNumber(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigLoadError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.server_addr.port(), 3000);
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.acquire_timeout, Duration::from_secs(5));
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn reads_database_settings() {
        let config = load(&[
            ("PORT", "8080"),
            ("DB_HOST", "db.internal"),
            ("DB_USER", "app"),
            ("DB_PASSWORD", "s3cret"),
            ("DB_NAME", "troupe"),
        ])
        .unwrap();
        assert_eq!(config.server_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.user, "app");
        assert_eq!(config.database.password, "s3cret");
        assert_eq!(config.database.name, "troupe");
    }

    #[test]
    fn rejects_invalid_numbers() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigLoadError::InvalidNumber("PORT")));

        let err = load(&[("DB_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigLoadError::InvalidNumber("DB_MAX_CONNECTIONS")));
    }
}
