//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// The FlowyCart production GraphQL endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.flowycart.com/api/graphql";

/// A validated FlowyCart API key.
///
/// The key is sent verbatim as the `authorization` header of every request,
/// so it must be non-empty and consist of characters that are legal in an
/// HTTP header value.
///
/// # Security
///
/// The `Debug` implementation masks the key, displaying only
/// `ApiKey(*****)` instead of the actual value.
///
/// # Example
///
/// ```rust
/// use flowycart::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty, or
    /// [`ConfigError::InvalidApiKey`] if it contains control or non-ASCII
    /// characters.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        if reqwest::header::HeaderValue::from_str(&key).is_err() {
            return Err(ConfigError::InvalidApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated GraphQL endpoint URL.
///
/// The value must parse as an absolute `http` or `https` URL with a host.
/// The parsed URL is used as the POST target, including any path.
///
/// # Example
///
/// ```rust
/// use flowycart::BaseUrl;
///
/// let url = BaseUrl::new("https://api.flowycart.com/api/graphql").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.flowycart.com");
///
/// assert_eq!(BaseUrl::default().as_ref(), flowycart::DEFAULT_BASE_URL);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(reqwest::Url);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL does not parse, has
    /// a scheme other than `http`/`https`, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url: String = url.into();
        let url = url.trim();
        let invalid = || ConfigError::InvalidBaseUrl {
            url: url.to_string(),
        };

        let parsed = reqwest::Url::parse(url).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid());
        }
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(invalid());
        }

        Ok(Self(parsed))
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// Returns the host name portion of the URL.
    ///
    /// IPv6 hosts keep their brackets, e.g. `[::1]`.
    #[must_use]
    pub fn host_name(&self) -> &str {
        self.0.host_str().unwrap_or_default()
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid https URL")
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_rejects_header_breaking_characters() {
        assert!(matches!(
            ApiKey::new("key\r\nx-injected: 1"),
            Err(ConfigError::InvalidApiKey)
        ));
    }

    #[test]
    fn test_api_key_is_kept_verbatim() {
        let key = ApiKey::new("  sk_live 123  ").unwrap();
        assert_eq!(key.as_ref(), "  sk_live 123  ");
    }

    #[test]
    fn test_api_key_debug_is_masked() {
        let key = ApiKey::new("super-secret").unwrap();
        let debug = format!("{key:?}");
        assert_eq!(debug, "ApiKey(*****)");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_base_url_accepts_http_and_https() {
        let url = BaseUrl::new("http://127.0.0.1:8080/graphql").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1");
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080/graphql");

        let url = BaseUrl::new(" https://sandbox.flowycart.com/api/graphql ").unwrap();
        assert_eq!(url.host_name(), "sandbox.flowycart.com");
        assert_eq!(url.as_ref(), "https://sandbox.flowycart.com/api/graphql");

        let url = BaseUrl::new("http://[::1]:8080/graphql").unwrap();
        assert_eq!(url.host_name(), "[::1]");

        let url = BaseUrl::new("https://user:pw@host.example/x").unwrap();
        assert_eq!(url.host_name(), "host.example");
    }

    #[test]
    fn test_base_url_rejects_invalid_values() {
        for url in [
            "",
            "api.flowycart.com",
            "ftp://api.flowycart.com",
            "mailto:team@flowycart.com",
            "https://",
            "https://exa mple.com/g",
        ] {
            assert!(
                matches!(BaseUrl::new(url), Err(ConfigError::InvalidBaseUrl { .. })),
                "expected {url:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_default_base_url_matches_parsed_production_endpoint() {
        let parsed = BaseUrl::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(BaseUrl::default(), parsed);
        assert_eq!(BaseUrl::default().host_name(), "api.flowycart.com");
    }
}
