//! Client configuration
//!
//! Configuration is assembled from built-in defaults overridden by
//! `KELASKU_`-prefixed environment variables, so a deployment can point the
//! client at a different backend without a rebuild.

use anyhow::Result;
use serde::Deserialize;

/// Configuration for the API client
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the e-learning backend (e.g. "https://api.kelasku.id")
    pub api_base_url: String,
    /// Request timeout in seconds
    pub request_timeout_seconds: u64,
    /// Delay before redirecting to the login route after a session expires,
    /// in milliseconds (long enough for the user to read the message)
    pub session_redirect_delay_ms: u64,
    /// How long a success/error notification stays visible, in milliseconds
    pub notification_ttl_ms: u64,
    /// Number of automatic retries for network failures (0 disables retrying)
    pub retry_max_retries: u32,
    /// Fixed backoff between retries, in milliseconds
    pub retry_backoff_ms: u64,
}

impl ClientConfig {
    /// Load the configuration from defaults and environment variables
    ///
    /// # Environment Variables
    /// - `KELASKU_API_BASE_URL`: backend base URL (default: "http://localhost:3000")
    /// - `KELASKU_REQUEST_TIMEOUT_SECONDS`: request timeout (default: 30)
    /// - `KELASKU_SESSION_REDIRECT_DELAY_MS`: login redirect delay (default: 2000)
    /// - `KELASKU_NOTIFICATION_TTL_MS`: notification lifetime (default: 5000)
    /// - `KELASKU_RETRY_MAX_RETRIES`: network retry count (default: 0)
    /// - `KELASKU_RETRY_BACKOFF_MS`: retry backoff (default: 500)
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("api_base_url", "http://localhost:3000")?
            .set_default("request_timeout_seconds", 30_i64)?
            .set_default("session_redirect_delay_ms", 2000_i64)?
            .set_default("notification_ttl_ms", 5000_i64)?
            .set_default("retry_max_retries", 0_i64)?
            .set_default("retry_backoff_ms", 500_i64)?
            .add_source(config::Environment::with_prefix("KELASKU"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Retry policy derived from this configuration
    pub fn retry(&self) -> RetryConfig {
        RetryConfig {
            max_retries: self.retry_max_retries,
            backoff_ms: self.retry_backoff_ms,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            request_timeout_seconds: 30,
            session_redirect_delay_ms: 2000,
            notification_ttl_ms: 5000,
            retry_max_retries: 0,
            retry_backoff_ms: 500,
        }
    }
}

/// Retry policy for network failures
///
/// Only failures where no response was received are retried; every HTTP
/// error is surfaced to the caller immediately.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries after the initial attempt
    pub max_retries: u32,
    /// Fixed backoff between attempts, in milliseconds
    pub backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 0,
            backoff_ms: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_defaults() {
        let config = ClientConfig::load().expect("Failed to load client config");
        assert_eq!(config.request_timeout_seconds, 30);
        assert_eq!(config.session_redirect_delay_ms, 2000);
        assert_eq!(config.notification_ttl_ms, 5000);
        assert_eq!(config.retry_max_retries, 0);
    }

    #[test]
    #[serial]
    fn test_config_env_override() {
        unsafe {
            std::env::set_var("KELASKU_API_BASE_URL", "https://api.kelasku.id");
            std::env::set_var("KELASKU_RETRY_MAX_RETRIES", "2");
        }

        let config = ClientConfig::load().expect("Failed to load client config");
        assert_eq!(config.api_base_url, "https://api.kelasku.id");
        assert_eq!(config.retry().max_retries, 2);

        unsafe {
            std::env::remove_var("KELASKU_API_BASE_URL");
            std::env::remove_var("KELASKU_RETRY_MAX_RETRIES");
        }
    }
}
