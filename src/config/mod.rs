//! Configuration types for the FlowyCart SDK.
//!
//! This module provides the configuration used to initialize a
//! [`FlowyCart`](crate::FlowyCart) client.
//!
//! # Overview
//!
//! - [`FlowyCartConfig`]: The configuration struct holding all SDK settings
//! - [`FlowyCartConfigBuilder`]: A builder for constructing [`FlowyCartConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated GraphQL endpoint URL
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use flowycart::{ApiKey, BaseUrl, FlowyCartConfig};
//!
//! let config = FlowyCartConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .base_url(BaseUrl::new("https://api.flowycart.com/api/graphql").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

use std::time::Duration;

pub use newtypes::{ApiKey, BaseUrl, DEFAULT_BASE_URL};

use crate::error::ConfigError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the FlowyCart SDK.
///
/// # Thread Safety
///
/// `FlowyCartConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct FlowyCartConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    timeout: Duration,
    user_agent_prefix: Option<String>,
    error_on_http_status: bool,
}

impl FlowyCartConfig {
    /// Creates a new builder for constructing a `FlowyCartConfig`.
    #[must_use]
    pub fn builder() -> FlowyCartConfigBuilder {
        FlowyCartConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns whether non-2xx responses are reported as errors.
    ///
    /// When `false` (the default), the decoded body of a non-2xx response is
    /// returned to the caller like any other response.
    #[must_use]
    pub const fn error_on_http_status(&self) -> bool {
        self.error_on_http_status
    }
}

// Verify FlowyCartConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FlowyCartConfig>();
};

/// Builder for constructing [`FlowyCartConfig`] instances.
///
/// The only required field is `api_key`.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `timeout`: 30 seconds
/// - `user_agent_prefix`: `None`
/// - `error_on_http_status`: `false`
#[derive(Debug, Default)]
pub struct FlowyCartConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
    error_on_http_status: Option<bool>,
}

impl FlowyCartConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the GraphQL endpoint URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Reports non-2xx responses as [`HttpError::Status`](crate::clients::HttpError::Status)
    /// instead of returning their body.
    #[must_use]
    pub const fn error_on_http_status(mut self, enabled: bool) -> Self {
        self.error_on_http_status = Some(enabled);
        self
    }

    /// Builds the [`FlowyCartConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<FlowyCartConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(FlowyCartConfig {
            api_key,
            base_url: self.base_url.unwrap_or_default(),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
            error_on_http_status: self.error_on_http_status.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = FlowyCartConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = FlowyCartConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent_prefix().is_none());
        assert!(!config.error_on_http_status());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let url = BaseUrl::new("http://localhost:4000/graphql").unwrap();

        let config = FlowyCartConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .base_url(url.clone())
            .timeout(Duration::from_secs(5))
            .user_agent_prefix("MyShop/2.1")
            .error_on_http_status(true)
            .build()
            .unwrap();

        assert_eq!(config.base_url(), &url);
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.user_agent_prefix(), Some("MyShop/2.1"));
        assert!(config.error_on_http_status());
    }

    #[test]
    fn test_config_debug_does_not_leak_api_key() {
        let config = FlowyCartConfig::builder()
            .api_key(ApiKey::new("sk_live_abcdef").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("FlowyCartConfig"));
        assert!(!debug_str.contains("sk_live_abcdef"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FlowyCartConfig>();
    }
}
