//! Configuration utilities

use serde::{Deserialize, Serialize};
use std::env;

/// Đường dẫn mặc định tới bảng phí
pub const DEFAULT_FEE_TABLE_PATH: &str = "resources/fee_structure.json";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub log_level: String,
    pub fee_table_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "loanfee".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            debug: false,
            log_level: "info".to_string(),
            fee_table_path: DEFAULT_FEE_TABLE_PATH.to_string(),
        }
    }
}

impl AppConfig {
    /// Load config từ environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load config từ một nguồn key/value bất kỳ, thiếu key thì dùng default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Invalid PORT '{}', using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        Self {
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            debug: lookup("DEBUG")
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.debug),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            fee_table_path: lookup("FEE_TABLE_PATH").unwrap_or(defaults.fee_table_path),
        }
    }

    /// Lấy địa chỉ bind đầy đủ
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.port, 8080);
        assert!(!config.debug);
        assert_eq!(config.fee_table_path, DEFAULT_FEE_TABLE_PATH);
    }

    #[test]
    fn test_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("PORT", "9090"),
            ("DEBUG", "true"),
            ("FEE_TABLE_PATH", "/etc/loanfee/fees.json"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.port, 9090);
        assert!(config.debug);
        assert_eq!(config.fee_table_path, "/etc/loanfee/fees.json");
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_lookup(|key| match key {
            "PORT" => Some("not-a-port".to_string()),
            "DEBUG" => Some("maybe".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 8080);
        assert!(!config.debug);
    }
}
