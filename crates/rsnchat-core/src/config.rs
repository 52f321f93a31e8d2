//! Configuration structures for RsnChat clients.
//!
//! This module provides the validated settings a client is built from: the API
//! key, the service base URL and the request timeout.

use crate::client::DEFAULT_TIMEOUT_SECS;
use crate::error::{Error, Result};
use crate::types::DEFAULT_BASE_URL;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "RSNCHAT_API_KEY";
/// Environment variable overriding the base URL.
pub const API_URL_ENV: &str = "RSNCHAT_API_URL";
/// Environment variable overriding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "RSNCHAT_TIMEOUT_SECS";

/// Configuration for an RsnChat client instance.
#[derive(Debug, Clone, Validate)]
pub struct RsnChatConfig {
    /// API key sent as a bearer token
    api_key: SecretString,

    /// Service base URL
    #[validate(url)]
    pub base_url: String,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 600))]
    pub request_timeout_secs: u64,
}

impl RsnChatConfig {
    /// Create a configuration for the default service origin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the API key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::ConfigError("please provide an API key".to_string()));
        }

        Ok(Self {
            api_key: SecretString::from(api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Load configuration from `RSNCHAT_API_KEY`, `RSNCHAT_API_URL` and
    /// `RSNCHAT_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the key is missing or a value is invalid.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the key is missing or a value is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .ok_or_else(|| Error::ConfigError(format!("{API_KEY_ENV} is not set")))?;
        let mut config = Self::new(api_key)?;

        if let Some(url) = lookup(API_URL_ENV) {
            config = config.with_base_url(url);
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let seconds = raw.trim().parse::<u64>().map_err(|err| {
                Error::ConfigError(format!("{TIMEOUT_ENV} must be a number of seconds: {err}"))
            })?;
            config = config.with_timeout(seconds);
        }

        config.check()?;
        Ok(config)
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// The API key.
    #[must_use]
    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] describing the first invalid field.
    pub fn check(&self) -> Result<()> {
        if self.api_key.expose_secret().is_empty() {
            return Err(Error::ConfigError("please provide an API key".to_string()));
        }
        self.validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))
    }

    /// Parse the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_base_url(&self) -> Result<Url> {
        crate::client::parse_base_url(&self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_new_uses_defaults() {
        let config = RsnChatConfig::new("key").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.api_key().expose_secret(), "key");
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_new_rejects_empty_key() {
        assert!(matches!(
            RsnChatConfig::new(""),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = RsnChatConfig::new("super-secret").unwrap();
        assert!(!format!("{config:?}").contains("super-secret"));
    }

    #[test]
    fn test_check_rejects_bad_values() {
        let config = RsnChatConfig::new("key").unwrap().with_base_url("nope");
        assert!(matches!(config.check(), Err(Error::ConfigError(_))));

        let config = RsnChatConfig::new("key").unwrap().with_timeout(0);
        assert!(matches!(config.check(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_from_lookup() {
        let config = RsnChatConfig::from_lookup(lookup_from(&[
            (API_KEY_ENV, "abc"),
            (API_URL_ENV, "http://localhost:9000/api"),
            (TIMEOUT_ENV, "15"),
        ]))
        .unwrap();

        assert_eq!(config.api_key().expose_secret(), "abc");
        assert_eq!(config.base_url, "http://localhost:9000/api");
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert_eq!(
            config.parse_base_url().unwrap().as_str(),
            "http://localhost:9000/api/"
        );
    }

    #[test]
    fn test_from_lookup_requires_key() {
        let result = RsnChatConfig::from_lookup(lookup_from(&[(API_URL_ENV, "http://x")]));
        assert!(matches!(result, Err(Error::ConfigError(ref msg)) if msg.contains(API_KEY_ENV)));
    }

    #[test]
    fn test_from_lookup_rejects_bad_timeout() {
        let result = RsnChatConfig::from_lookup(lookup_from(&[
            (API_KEY_ENV, "abc"),
            (TIMEOUT_ENV, "soon"),
        ]));
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }
}
