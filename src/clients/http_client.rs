//! HTTP client for FlowyCart API communication.
//!
//! This module provides the [`HttpClient`] type, the single place where
//! request bodies are put on the wire and response bodies are decoded.

use std::collections::HashMap;

use crate::clients::errors::{DecodeError, HttpError, HttpStatusError};
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, FlowyCartConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the FlowyCart API.
///
/// The client handles:
/// - Default headers (`Content-Type`, `Accept`, `Authorization`, `User-Agent`)
/// - The configured request timeout
/// - JSON decoding of response bodies
/// - Optional conversion of non-2xx statuses into [`HttpError::Status`]
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use flowycart::{ApiKey, FlowyCartConfig};
/// use flowycart::clients::HttpClient;
/// use serde_json::json;
///
/// let config = FlowyCartConfig::builder()
///     .api_key(ApiKey::new("my-api-key").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// let response = client.post_json(&json!({"query": "query { countries { id } }"})).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The endpoint every request is posted to.
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Whether non-2xx responses become errors.
    error_on_http_status: bool,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &FlowyCartConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}FlowyCart Rust SDK v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert(
            "Authorization".to_string(),
            config.api_key().as_ref().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
            error_on_http_status: config.error_on_http_status(),
        }
    }

    /// Returns the endpoint URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Posts a JSON body to the endpoint and decodes the JSON response.
    ///
    /// Non-2xx responses are returned like any other response unless the
    /// client was configured with `error_on_http_status(true)`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The request could not be sent or the body could not be read (`Transport`)
    /// - The body is not valid JSON (`Decode`)
    /// - The status is not 2xx and status errors are enabled (`Status`)
    pub async fn post_json(&self, body: &serde_json::Value) -> Result<HttpResponse, HttpError> {
        let url = self.base_url.as_ref();
        tracing::debug!("Sending POST request to {}", url);

        let mut req_builder = self.client.post(url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.body(body.to_string()).send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let is_ok = (200..=299).contains(&code);
        if !is_ok {
            let request_id = headers
                .get("x-request-id")
                .and_then(|values| values.first())
                .cloned();
            if self.error_on_http_status {
                return Err(HttpError::Status(HttpStatusError {
                    code,
                    body: body_text,
                    error_reference: request_id,
                }));
            }
            tracing::warn!(
                "FlowyCart API at {} responded with status {}{}",
                url,
                code,
                request_id.map_or(String::new(), |id| format!(" (request id {id})"))
            );
        }

        let body = match serde_json::from_str(&body_text) {
            Ok(body) => body,
            Err(source) => {
                return Err(HttpError::Decode(DecodeError {
                    code,
                    body: body_text,
                    source,
                }))
            }
        };

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
