//! Configuration for item-desk, read from the environment with CLI overrides.

use std::time::Duration;

use anyhow::{Context, Result};
use item_core::DEFAULT_BASE_URL;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the item API, without the `items` segment
    pub base_url: String,
    /// HTTP client configuration
    pub http: HttpConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpConfig {
    /// Global request timeout; `None` keeps the HTTP library's default
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            http: HttpConfig::default(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup("ITEM_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_seconds = match lookup("ITEM_HTTP_TIMEOUT_SECONDS") {
            Some(raw) => Some(raw.trim().parse::<u64>().with_context(|| {
                format!("Failed to parse environment variable ITEM_HTTP_TIMEOUT_SECONDS = '{raw}'")
            })?),
            None => None,
        };

        Ok(Config {
            base_url,
            http: HttpConfig { timeout_seconds },
        })
    }

    /// Apply command-line flags on top of the environment.
    pub fn with_overrides(mut self, base_url: Option<&str>, timeout_seconds: Option<u64>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url.to_string();
        }
        if timeout_seconds.is_some() {
            self.http.timeout_seconds = timeout_seconds;
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(anyhow::anyhow!(
                "Base URL must start with http:// or https://: {}",
                self.base_url
            ));
        }
        if self.http.timeout_seconds == Some(0) {
            return Err(anyhow::anyhow!("HTTP timeout must be at least one second"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.http.timeout(), None);
        config.validate().unwrap();
    }

    #[test]
    fn test_config_reads_environment() {
        let config = Config::from_lookup(lookup(&[
            ("ITEM_API_BASE_URL", "http://10.0.0.2:8080/api/"),
            ("ITEM_HTTP_TIMEOUT_SECONDS", " 15 "),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://10.0.0.2:8080/api/");
        assert_eq!(config.http.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_config_rejects_bad_timeout() {
        let err = Config::from_lookup(lookup(&[("ITEM_HTTP_TIMEOUT_SECONDS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("ITEM_HTTP_TIMEOUT_SECONDS"));
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = Config::from_lookup(lookup(&[("ITEM_HTTP_TIMEOUT_SECONDS", "15")]))
            .unwrap()
            .with_overrides(Some("https://items.test/api"), None);
        assert_eq!(config.base_url, "https://items.test/api");
        assert_eq!(config.http.timeout_seconds, Some(15));

        let config = config.with_overrides(None, Some(3));
        assert_eq!(config.http.timeout_seconds, Some(3));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.base_url = "localhost:5000".to_string();
        assert!(config.validate().is_err());

        let config = Config::default().with_overrides(None, Some(0));
        assert!(config.validate().is_err());
    }
}
