//! Client configuration.

use std::time::Duration;

/// Base URL of the production API.
pub const PRODUCTION_BASE_URL: &str = "https://api.billforge.com";

/// Base URL of the sandbox API.
pub const SANDBOX_BASE_URL: &str = "https://sandbox-api.billforge.com";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "BILLFORGE_API_KEY";

/// Environment variable overriding the base URL.
pub const API_URL_VAR: &str = "BILLFORGE_API_URL";

/// Predefined API environments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Live billing.
    Production,
    /// Test billing; sandbox API keys only.
    Sandbox,
    /// Custom base URL, for proxies and test servers.
    Custom(String),
}

impl Environment {
    /// Return the base URL for the environment.
    #[must_use]
    pub fn base_url(&self) -> &str {
        match self {
            Self::Production => PRODUCTION_BASE_URL,
            Self::Sandbox => SANDBOX_BASE_URL,
            Self::Custom(url) => url,
        }
    }
}

/// Configuration for a [`crate::Client`].
#[derive(Debug, Clone)]
pub struct Config {
    /// API key sent as a bearer token.
    pub api_key: String,
    /// Base URL, without a trailing slash.
    pub base_url: String,
    /// Request timeout applied by the default transport.
    pub timeout: Duration,
}

impl Config {
    /// Build a production configuration with default timeout.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: PRODUCTION_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Select a predefined environment.
    #[must_use]
    pub fn with_environment(mut self, environment: &Environment) -> Self {
        self.base_url = environment.base_url().trim_end_matches('/').to_string();
        self
    }

    /// Override the base URL (trailing slash trimmed).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the request timeout used by the default transport.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// `BILLFORGE_API_KEY` is required; `BILLFORGE_API_URL` optionally
    /// overrides the production base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `BILLFORGE_API_KEY` is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key =
            std::env::var(API_KEY_VAR).map_err(|_| ConfigError::MissingVar(API_KEY_VAR))?;
        let config = Self::new(api_key);
        match std::env::var(API_URL_VAR) {
            Ok(url) => Ok(config.with_base_url(url)),
            Err(_) => Ok(config),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is unset.
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let config = Config::new("bf_sk_test").with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn environments_resolve_base_urls() {
        assert_eq!(Environment::Production.base_url(), PRODUCTION_BASE_URL);
        assert_eq!(Environment::Sandbox.base_url(), SANDBOX_BASE_URL);
        assert_eq!(
            Environment::Custom("http://localhost:1234".to_string()).base_url(),
            "http://localhost:1234"
        );
    }

    #[test]
    fn sandbox_selection() {
        let config = Config::new("bf_sk_test").with_environment(&Environment::Sandbox);
        assert_eq!(config.base_url, SANDBOX_BASE_URL);
    }
}
