//! GraphQL client implementation for the FlowyCart API.
//!
//! This module provides the [`GraphqlClient`] type for executing GraphQL
//! documents against the FlowyCart endpoint.

use crate::clients::graphql::{GraphqlError, GraphqlRequest};
use crate::clients::HttpClient;
use crate::config::FlowyCartConfig;

/// GraphQL API client for the FlowyCart API.
///
/// Wraps an [`HttpClient`] and turns a `(query, variables, operation)`
/// triple into the JSON envelope posted to the endpoint.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use flowycart::{ApiKey, FlowyCartConfig};
/// use flowycart::clients::graphql::GraphqlClient;
/// use serde_json::json;
///
/// let config = FlowyCartConfig::builder()
///     .api_key(ApiKey::new("my-api-key").unwrap())
///     .build()
///     .unwrap();
///
/// let client = GraphqlClient::new(&config);
///
/// let body = client.execute(
///     "query zones($countryId: String!) { zones(countryId: $countryId) { id name code } }",
///     Some(json!({ "countryId": "1" })),
///     Some("zones"),
/// ).await?;
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client from the given configuration.
    #[must_use]
    pub fn new(config: &FlowyCartConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Executes a GraphQL document and returns the decoded response body.
    ///
    /// The body is returned unmodified, including any `errors` field.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] on transport failures, undecodable
    /// bodies, and (when enabled) non-2xx statuses.
    pub async fn execute(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
        operation: Option<&str>,
    ) -> Result<serde_json::Value, GraphqlError> {
        let request = GraphqlRequest {
            query,
            variables,
            operation,
        };
        self.send(&request).await
    }

    /// Sends a prepared envelope and returns the decoded response body.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn send(&self, request: &GraphqlRequest<'_>) -> Result<serde_json::Value, GraphqlError> {
        tracing::debug!(
            "Executing FlowyCart GraphQL operation {}",
            request.operation.unwrap_or("<anonymous>")
        );

        let body = serde_json::to_value(request).map_err(GraphqlError::InvalidVariables)?;
        let response = self.http_client.post_json(&body).await?;
        Ok(response.into_body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, BaseUrl};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_config(base_url: &str) -> FlowyCartConfig {
        FlowyCartConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .base_url(BaseUrl::new(base_url).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_graphql_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GraphqlClient>();
    }

    #[tokio::test]
    async fn test_execute_posts_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(header("authorization", "test-api-key"))
            .and(body_json(json!({
                "query": "query zones { zones { id } }",
                "variables": {"countryId": "7"},
                "operation": "zones"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"zones": []}})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GraphqlClient::new(&create_test_config(&mock_server.uri()));
        let body = client
            .execute(
                "query zones { zones { id } }",
                Some(json!({"countryId": "7"})),
                Some("zones"),
            )
            .await
            .unwrap();

        assert_eq!(body, json!({"data": {"zones": []}}));
    }

    #[tokio::test]
    async fn test_execute_without_variables_sends_nulls() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_json(json!({
                "query": "{ ping }",
                "variables": null,
                "operation": null
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"ping": true}})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GraphqlClient::new(&create_test_config(&mock_server.uri()));
        let body = client.execute("{ ping }", None, None).await.unwrap();

        assert_eq!(body["data"]["ping"], json!(true));
    }

    #[tokio::test]
    async fn test_graphql_errors_are_not_translated() {
        let mock_server = MockServer::start().await;
        let error_body = json!({
            "data": null,
            "errors": [{"message": "Cannot query field \"nope\"", "locations": [{"line": 1, "column": 3}]}]
        });

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(error_body.clone()))
            .mount(&mock_server)
            .await;

        let client = GraphqlClient::new(&create_test_config(&mock_server.uri()));
        let body = client.execute("{ nope }", None, None).await.unwrap();

        assert_eq!(body, error_body);
    }

    #[tokio::test]
    async fn test_transport_failure_is_http_error() {
        let client = GraphqlClient::new(&create_test_config("http://127.0.0.1:1"));
        let result = client.execute("{ ping }", None, None).await;

        assert!(matches!(
            result,
            Err(GraphqlError::Http(crate::clients::HttpError::Transport(_)))
        ));
    }
}
