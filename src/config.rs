//! Runtime configuration for the Mobi2Go client.
//!
//! Defaults target the production API. Overrides come from the CLI or
//! environment:
//! - `MOBI2GO_BASE_URL` - API base URL (default: `https://www.mobi2go.com/api/1`)
//! - `MOBI2GO_TIMEOUT_SECS` - per-call timeout in seconds (default: 30)
//! - `MOBI_COOKIE` - the session credential, see [`crate::credential`]

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

/// Default Mobi2Go API base URL.
pub const DEFAULT_BASE_URL: &str = "https://www.mobi2go.com/api/1";

/// Default ceiling for a single outbound call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Startup configuration errors. All of them are fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required. Provide it as an env var or a {0}=<value> argument.")]
    MissingCredential(&'static str),

    #[error("Unexpected argument '{0}'; expected {1}=<value>")]
    UnexpectedAssignment(String, &'static str),

    #[error("Invalid base URL '{0}': {1}")]
    InvalidBaseUrl(String, String),

    #[error("Timeout must be greater than zero")]
    ZeroTimeout,

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Parse and check the base URL.
    ///
    /// The URL must be absolute http(s) and able to carry path segments.
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidBaseUrl(self.base_url.clone(), reason.into());

        let url = Url::parse(&self.base_url).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path"));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("URL must not contain a query or fragment"));
        }
        Ok(url)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        self.parsed_base_url().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let config = Config::default().with_base_url("ftp://example.com/api");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBaseUrl(_, _))
        ));
    }

    #[test]
    fn test_rejects_unparseable_base_url() {
        let config = Config::default().with_base_url("not a url");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = Config::default().with_timeout(Duration::ZERO);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeout));
    }
}
