//! HTTP-specific error types for the FlowyCart SDK.
//!
//! # Error Handling
//!
//! - [`HttpError::Transport`]: Connection, DNS, TLS or timeout failures
//! - [`DecodeError`]: The response body was not valid JSON
//! - [`HttpStatusError`]: A non-2xx status, only when the client is configured
//!   with `error_on_http_status(true)`
//!
//! None of these are retried.
//!
//! # Example
//!
//! ```rust,ignore
//! use flowycart::clients::HttpError;
//!
//! match client.post_json(&body).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Transport(e)) => println!("Network error: {e}"),
//!     Err(HttpError::Decode(e)) => println!("Bad body ({}): {}", e.code, e.body),
//!     Err(HttpError::Status(e)) => println!("HTTP {}", e.code),
//! }
//! ```

use thiserror::Error;

/// Error returned when a response body cannot be decoded as JSON.
///
/// # Example
///
/// ```rust
/// use flowycart::clients::DecodeError;
///
/// let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
/// let error = DecodeError {
///     code: 502,
///     body: "<html>".to_string(),
///     source,
/// };
///
/// assert!(error.to_string().contains("502"));
/// ```
#[derive(Debug, Error)]
#[error("Response body with status {code} is not valid JSON: {source}")]
pub struct DecodeError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
    /// The underlying JSON error.
    #[source]
    pub source: serde_json::Error,
}

/// Error returned for a non-2xx response when status errors are enabled.
///
/// # Example
///
/// ```rust
/// use flowycart::clients::HttpStatusError;
///
/// let error = HttpStatusError {
///     code: 401,
///     body: r#"{"error":"Unauthorized"}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert_eq!(error.to_string(), r#"HTTP 401: {"error":"Unauthorized"}"#);
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {body}")]
pub struct HttpStatusError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network, connection or timeout error.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not valid JSON.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Non-2xx response status.
    #[error(transparent)]
    Status(#[from] HttpStatusError),
}
