//! HTTP response type for the FlowyCart SDK.

use std::collections::HashMap;

/// A decoded response from the FlowyCart API.
///
/// The body is the JSON document returned by the server, untouched.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use flowycart::clients::HttpResponse;
/// use serde_json::json;
///
/// let response = HttpResponse::new(200, HashMap::new(), json!({"data": {"zones": []}}));
/// assert!(response.is_ok());
/// assert_eq!(response.body["data"]["zones"], json!([]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Consumes the response, returning the body.
    #[must_use]
    pub fn into_body(self) -> serde_json::Value {
        self.body
    }
}
