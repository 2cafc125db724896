//! Application configuration management
//!
//! This module handles loading and validating configuration from environment
//! variables. All configuration is loaded at startup before the application
//! runs.

use std::env;
use std::sync::LazyLock;
use std::time::Duration;

use crate::constants::{
    DEFAULT_FETCH_TIMEOUT_SECONDS, DEFAULT_FETCH_USER_AGENT, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, upstream_defaults,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub fetch: FetchConfig,
    pub upstream: UpstreamConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Upstream fetch behavior
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Per-adapter timeout in seconds; a hung upstream degrades to a
    /// failure record instead of stalling the whole request
    pub timeout_seconds: u64,
    /// User agent sent to scraped profile pages
    pub user_agent: String,
}

/// Base URLs of the upstream platform services
///
/// Overridable individually so a deployment can point at a mirror, and so
/// tests can point an adapter at an unroutable address.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub codeforces_api: String,
    pub leetcode_api: String,
    pub codechef: String,
    pub spoj: String,
    pub interviewbit: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            fetch: FetchConfig::from_env()?,
            upstream: UpstreamConfig::from_env(),
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl FetchConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            timeout_seconds: env::var("FETCH_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| DEFAULT_FETCH_TIMEOUT_SECONDS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FETCH_TIMEOUT_SECONDS".to_string()))?,
            user_agent: env::var("FETCH_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_FETCH_USER_AGENT.to_string()),
        })
    }

    /// Per-adapter timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl UpstreamConfig {
    fn from_env() -> Self {
        Self {
            codeforces_api: env::var("CODEFORCES_API_URL")
                .unwrap_or_else(|_| upstream_defaults::CODEFORCES_API.to_string()),
            leetcode_api: env::var("LEETCODE_API_URL")
                .unwrap_or_else(|_| upstream_defaults::LEETCODE_API.to_string()),
            codechef: env::var("CODECHEF_URL")
                .unwrap_or_else(|_| upstream_defaults::CODECHEF.to_string()),
            spoj: env::var("SPOJ_URL").unwrap_or_else(|_| upstream_defaults::SPOJ.to_string()),
            interviewbit: env::var("INTERVIEWBIT_URL")
                .unwrap_or_else(|_| upstream_defaults::INTERVIEWBIT.to_string()),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Test that defaults are applied when env vars are not set
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 3000);
    }

    #[test]
    fn test_fetch_timeout_duration() {
        let fetch = FetchConfig {
            timeout_seconds: 7,
            user_agent: DEFAULT_FETCH_USER_AGENT.to_string(),
        };
        assert_eq!(fetch.timeout(), Duration::from_secs(7));
    }
}
