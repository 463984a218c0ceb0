//! Client configuration.

use thiserror::Error;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "PETLOG_API_URL";

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings injected into [`crate::ApiClient`] at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to, without a trailing slash
    pub base_url: String,
    /// `User-Agent` header sent with every request
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration for the given base URL.
    pub fn new(base_url: &str) -> ConfigResult<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');

        let parsed = reqwest::Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            user_agent: default_user_agent(),
        })
    }

    /// Read the base URL from `PETLOG_API_URL`, falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_env_value(std::env::var(API_URL_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> ConfigResult<Self> {
        match value {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    /// Override the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("petlog/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_trailing_slash() {
        let config = ClientConfig::new("http://localhost:8000/api/").unwrap();
        assert_eq!(config.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn test_rejects_invalid_url() {
        let err = ClientConfig::new("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        assert!(ClientConfig::new("ftp://example.com/api").is_err());
    }

    #[test]
    fn test_default_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert!(config.user_agent.starts_with("petlog/"));
    }

    #[test]
    fn test_env_value_overrides_default() {
        let config = ClientConfig::from_env_value(Some("https://vet.example.com/api/")).unwrap();
        assert_eq!(config.base_url, "https://vet.example.com/api");
    }

    #[test]
    fn test_unset_or_blank_env_value_uses_default() {
        let unset = ClientConfig::from_env_value(None).unwrap();
        assert_eq!(unset.base_url, DEFAULT_API_URL);

        let blank = ClientConfig::from_env_value(Some("  ")).unwrap();
        assert_eq!(blank.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_invalid_env_value_is_an_error() {
        let err = ClientConfig::from_env_value(Some("localhost:8000")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_from_env_builds_a_config() {
        if std::env::var(API_URL_ENV).is_err() {
            assert_eq!(ClientConfig::from_env().unwrap().base_url, DEFAULT_API_URL);
        }
    }

    #[test]
    fn test_custom_user_agent() {
        let config = ClientConfig::default().with_user_agent("vet-kiosk/2");
        assert_eq!(config.user_agent, "vet-kiosk/2");
    }
}
