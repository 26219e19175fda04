//! The FlowyCart API client.
//!
//! [`FlowyCart`] owns the configured [`GraphqlClient`] and exposes the raw
//! [`execute`](FlowyCart::execute) call. The domain operations (merchants,
//! customers, orders, countries and zones) are implemented on it in the
//! [`resources`](crate::resources) modules.

use tokio::sync::OnceCell;

use crate::clients::GraphqlClient;
use crate::config::{ApiKey, BaseUrl, FlowyCartConfig};
use crate::error::{ConfigError, FlowyCartError};

/// Client for the FlowyCart API.
///
/// The client holds configuration only; calls are independent of each other.
/// The one exception is [`get_countries`](Self::get_countries), whose first
/// successful result is kept for the lifetime of the instance.
///
/// # Thread Safety
///
/// `FlowyCart` is `Send + Sync`; share it behind an `Arc` to issue
/// concurrent calls from several tasks.
///
/// # Example
///
/// ```rust,ignore
/// use flowycart::FlowyCart;
///
/// let client = FlowyCart::new("my-api-key")?;
///
/// let merchant = client.connect("OpenCart", None).await?;
/// let zones = client.get_zones("1").await?;
/// ```
#[derive(Debug)]
pub struct FlowyCart {
    config: FlowyCartConfig,
    graphql: GraphqlClient,
    pub(crate) countries: OnceCell<serde_json::Value>,
}

// Verify FlowyCart is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FlowyCart>();
};

impl FlowyCart {
    /// Creates a client for the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if `api_key` is empty, or
    /// [`ConfigError::InvalidApiKey`] if it cannot be sent as a header.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowycart::{ConfigError, FlowyCart};
    ///
    /// let client = FlowyCart::new("my-api-key").unwrap();
    /// assert_eq!(client.config().base_url().as_ref(), "https://api.flowycart.com/api/graphql");
    ///
    /// assert!(matches!(FlowyCart::new(""), Err(ConfigError::EmptyApiKey)));
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let config = FlowyCartConfig::builder()
            .api_key(ApiKey::new(api_key)?)
            .build()?;
        Ok(Self::from_config(&config))
    }

    /// Creates a client for a custom endpoint (e.g., a sandbox).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the API key or the URL is invalid.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = FlowyCartConfig::builder()
            .api_key(ApiKey::new(api_key)?)
            .base_url(BaseUrl::new(base_url)?)
            .build()?;
        Ok(Self::from_config(&config))
    }

    /// Creates a client from a full configuration.
    #[must_use]
    pub fn from_config(config: &FlowyCartConfig) -> Self {
        Self {
            config: config.clone(),
            graphql: GraphqlClient::new(config),
            countries: OnceCell::new(),
        }
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &FlowyCartConfig {
        &self.config
    }

    /// Returns the underlying GraphQL client.
    #[must_use]
    pub const fn graphql(&self) -> &GraphqlClient {
        &self.graphql
    }

    /// Executes an arbitrary GraphQL document.
    ///
    /// Posts `{query, variables, operation}` to the configured endpoint and
    /// returns the decoded JSON body unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`FlowyCartError::Graphql`] on transport failures, undecodable
    /// bodies, and (when enabled) non-2xx statuses.
    pub async fn execute(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
        operation: Option<&str>,
    ) -> Result<serde_json::Value, FlowyCartError> {
        Ok(self.graphql.execute(query, variables, operation).await?)
    }
}
