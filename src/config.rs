//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Configuration Methods
//!
//! ### Method 1: Full URL (simpler for local development)
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! ```
//!
//! ### Method 2: Individual components (recommended for production)
//!
//! ```bash
//! export REDIS_HOST="localhost"
//! export REDIS_PORT="6379"
//! export REDIS_PASSWORD=""
//! export REDIS_DB="0"
//! ```
//!
//! ## Required Variables
//!
//! - `SIGNING_KEY` - secret used to sign and verify link tokens
//!
//! ## Optional Variables
//!
//! - `REDIS_URL` / `REDIS_HOST` - counter store connection; when neither is
//!   set, counts are held in process memory and lost on restart
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `REQUEST_TIMEOUT_SECS` - Per-request deadline (default: 60)
//! - `STORE_MAX_RETRIES` - Retries per store command (default: 3)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Secret used for both signing and verifying link tokens.
    /// Lives for the process lifetime; never rotated.
    pub signing_key: String,
    pub redis_url: Option<String>,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Deadline enforced on every request by the transport layer.
    pub request_timeout_secs: u64,
    /// Retry attempts per counter store command before surfacing an error.
    pub store_max_retries: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SIGNING_KEY` is missing.
    pub fn from_env() -> Result<Self> {
        let signing_key = env::var("SIGNING_KEY").context("SIGNING_KEY must be set")?;

        let redis_url = Self::load_redis_url();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        let store_max_retries = env::var("STORE_MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        Ok(Self {
            signing_key,
            redis_url,
            listen_addr,
            log_level,
            log_format,
            request_timeout_secs,
            store_max_retries,
        })
    }

    /// Loads Redis URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `REDIS_URL` environment variable
    /// 2. Constructed from `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, `REDIS_DB`
    ///
    /// Returns `None` if Redis is not configured.
    fn load_redis_url() -> Option<String> {
        if let Ok(url) = env::var("REDIS_URL") {
            return Some(url);
        }

        let host = env::var("REDIS_HOST").ok()?;
        let port = env::var("REDIS_PORT").unwrap_or_else(|_| "6379".to_string());
        let password = env::var("REDIS_PASSWORD").ok();
        let db = env::var("REDIS_DB").unwrap_or_else(|_| "0".to_string());

        let url = match password {
            // Empty password means no authentication
            Some(pwd) if !pwd.is_empty() => format!("redis://:{}@{}:{}/{}", pwd, host, port, db),
            _ => format!("redis://{}:{}/{}", host, port, db),
        };

        Some(url)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `signing_key` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `redis_url` does not look like a Redis URL
    /// - `request_timeout_secs` is zero
    pub fn validate(&self) -> Result<()> {
        if self.signing_key.is_empty() {
            anyhow::bail!("SIGNING_KEY must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref redis_url) = self.redis_url
            && !redis_url.starts_with("redis://")
            && !redis_url.starts_with("rediss://")
        {
            anyhow::bail!(
                "REDIS_URL must start with 'redis://' or 'rediss://', got '{}'",
                redis_url
            );
        }

        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        if let Some(ref redis_url) = self.redis_url {
            tracing::info!("  Redis: {} (enabled)", mask_connection_string(redis_url));
        } else {
            tracing::info!("  Redis: disabled (in-memory counts)");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Request timeout: {}s", self.request_timeout_secs);
        tracing::info!("  Store retries: {}", self.store_max_retries);
    }
}

/// Masks sensitive information in connection strings for logging.
///
/// Replaces password with `***` in URLs like:
/// - `redis://:password@host:port/db` → `redis://:***@host:port/db`
fn mask_connection_string(url: &str) -> String {
    if let Some(start) = url.find("://") {
        let scheme_end = start + 3;
        let rest = &url[scheme_end..];

        if let Some(at_pos) = rest.find('@') {
            let credentials = &rest[..at_pos];
            let host_part = &rest[at_pos..];

            if let Some(colon_pos) = credentials.rfind(':') {
                let username = &credentials[..colon_pos];
                return format!("{}://{}:***{}", &url[..start], username, host_part);
            }
        }
    }

    url.to_string()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            signing_key: "secret".to_string(),
            redis_url: None,
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            request_timeout_secs: 60,
            store_max_retries: 3,
        }
    }

    #[test]
    fn test_mask_connection_string() {
        assert_eq!(
            mask_connection_string("redis://:password@localhost:6379/0"),
            "redis://:***@localhost:6379/0"
        );

        assert_eq!(
            mask_connection_string("redis://localhost:6379/0"),
            "redis://localhost:6379/0"
        );
    }

    #[test]
    fn test_config_validation() {
        assert!(base_config().validate().is_ok());

        let mut config = base_config();
        config.signing_key = String::new();
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.listen_addr = "no-port".to_string();
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.redis_url = Some("http://localhost".to_string());
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        unsafe {
            env::set_var("SIGNING_KEY", "secret");
            env::remove_var("REDIS_URL");
            env::remove_var("REDIS_HOST");
            env::remove_var("LISTEN");
            env::remove_var("REQUEST_TIMEOUT_SECS");
            env::remove_var("STORE_MAX_RETRIES");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.signing_key, "secret");
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.request_timeout_secs, 60);
        assert_eq!(config.store_max_retries, 3);
        assert!(config.redis_url.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_missing_signing_key() {
        unsafe {
            env::remove_var("SIGNING_KEY");
        }

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_redis_url_from_components() {
        unsafe {
            env::set_var("SIGNING_KEY", "secret");
            env::remove_var("REDIS_URL");
            env::set_var("REDIS_HOST", "redis.internal");
            env::set_var("REDIS_PORT", "6380");
            env::set_var("REDIS_PASSWORD", "hunter2");
            env::set_var("REDIS_DB", "1");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(
            config.redis_url.as_deref(),
            Some("redis://:hunter2@redis.internal:6380/1")
        );

        unsafe {
            env::remove_var("REDIS_HOST");
            env::remove_var("REDIS_PORT");
            env::remove_var("REDIS_PASSWORD");
            env::remove_var("REDIS_DB");
        }
    }
}
