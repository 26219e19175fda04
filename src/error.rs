//! Error types for the FlowyCart SDK.
//!
//! This module contains the configuration error type and the top-level
//! [`FlowyCartError`] returned by every [`FlowyCart`](crate::FlowyCart) method.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Request failures are reported through
//! [`FlowyCartError::Graphql`], which wraps the transport, decode and status
//! errors of the HTTP layer.
//!
//! GraphQL-level errors (an `errors` array in a 200 response) are *not*
//! errors from the SDK's point of view: the response body is returned as-is
//! and the caller decides what to do with it.
//!
//! # Example
//!
//! ```rust
//! use flowycart::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

use crate::clients::graphql::GraphqlError;
use crate::clients::HttpError;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid FlowyCart API key.")]
    EmptyApiKey,

    /// API key contains characters that cannot be sent in an HTTP header.
    #[error("API key contains characters that are not allowed in an HTTP header value.")]
    InvalidApiKey,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an http(s) URL (e.g., 'https://api.flowycart.com/api/graphql').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// Unified error type for [`FlowyCart`](crate::FlowyCart) operations.
///
/// # Example
///
/// ```rust,ignore
/// use flowycart::{FlowyCart, FlowyCartError};
///
/// match client.get_countries().await {
///     Ok(body) => println!("{body}"),
///     Err(e) if e.is_transport() => println!("FlowyCart unreachable: {e}"),
///     Err(e) if e.is_decode() => println!("Unexpected response: {e}"),
///     Err(e) => println!("Request failed: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum FlowyCartError {
    /// The client could not be configured.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The GraphQL request failed.
    #[error(transparent)]
    Graphql(#[from] GraphqlError),
}

impl FlowyCartError {
    /// Returns the underlying HTTP error, if the failure happened on the wire.
    #[must_use]
    pub const fn http_error(&self) -> Option<&HttpError> {
        match self {
            Self::Graphql(GraphqlError::Http(e)) => Some(e),
            _ => None,
        }
    }

    /// Returns `true` for connection, DNS and timeout failures.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self.http_error(), Some(HttpError::Transport(_)))
    }

    /// Returns `true` when the response body was not valid JSON.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self.http_error(), Some(HttpError::Decode(_)))
    }

    /// Returns `true` when a non-2xx status was surfaced as an error.
    #[must_use]
    pub const fn is_status(&self) -> bool {
        matches!(self.http_error(), Some(HttpError::Status(_)))
    }
}
