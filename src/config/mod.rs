//! Configuration module for the ID-card backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::AppError;

/// Which Local Record Store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// SQLite file, survives restarts
    Sqlite,
    /// Process memory, gone on restart
    Memory,
}

impl StoreBackend {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Some(StoreBackend::Sqlite),
            "memory" => Some(StoreBackend::Memory),
            _ => None,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file holding the record store
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Store backend selection
    pub store_backend: StoreBackend,
    /// Artificial latency of the mock submit and password endpoints
    pub submit_delay: Duration,
    /// When set, every submission takes the simulated failure path
    pub submit_failure: bool,
    /// Current password of the mocked account
    pub mock_password: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("RAILID_DB_PATH")
            .unwrap_or_else(|_| "./data/idcard.sqlite".to_string())
            .into();

        let bind_addr = env::var("RAILID_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e| AppError::Internal(format!("Invalid RAILID_BIND_ADDR: {}", e)))?;

        let log_level = env::var("RAILID_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let store_backend = match env::var("RAILID_STORE") {
            Ok(value) => StoreBackend::from_str(&value).ok_or_else(|| {
                AppError::Internal(format!("Invalid RAILID_STORE: {}", value))
            })?,
            Err(_) => StoreBackend::Sqlite,
        };

        let submit_delay_ms: u64 = match env::var("RAILID_SUBMIT_DELAY_MS") {
            Ok(value) => value.parse().map_err(|e| {
                AppError::Internal(format!("Invalid RAILID_SUBMIT_DELAY_MS: {}", e))
            })?,
            Err(_) => 1200,
        };

        let submit_failure = env::var("RAILID_SUBMIT_FAILURE")
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let mock_password =
            env::var("RAILID_MOCK_PASSWORD").unwrap_or_else(|_| "railway@123".to_string());

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            store_backend,
            submit_delay: Duration::from_millis(submit_delay_ms),
            submit_failure,
            mock_password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("RAILID_DB_PATH");
        env::remove_var("RAILID_BIND_ADDR");
        env::remove_var("RAILID_LOG_LEVEL");
        env::remove_var("RAILID_STORE");
        env::remove_var("RAILID_SUBMIT_DELAY_MS");
        env::remove_var("RAILID_SUBMIT_FAILURE");
        env::remove_var("RAILID_MOCK_PASSWORD");

        let config = Config::from_env().unwrap();

        assert_eq!(config.db_path, PathBuf::from("./data/idcard.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.store_backend, StoreBackend::Sqlite);
        assert_eq!(config.submit_delay, Duration::from_millis(1200));
        assert!(!config.submit_failure);
        assert_eq!(config.mock_password, "railway@123");
    }

    #[test]
    fn test_store_backend_parsing() {
        assert_eq!(StoreBackend::from_str("sqlite"), Some(StoreBackend::Sqlite));
        assert_eq!(StoreBackend::from_str(" Memory "), Some(StoreBackend::Memory));
        assert_eq!(StoreBackend::from_str("redis"), None);
    }
}
