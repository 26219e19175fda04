//! Countries and zones.
//!
//! The country list is treated as static: the first successful response is
//! kept on the client instance and served from memory afterwards. Zones are
//! always fetched.

use serde_json::json;

use crate::client::FlowyCart;
use crate::error::FlowyCartError;

/// Operation name for [`FlowyCart::get_countries`].
pub const COUNTRIES_OPERATION: &str = "countries";

/// Query document for [`FlowyCart::get_countries`].
pub const COUNTRIES_QUERY: &str = r"
query countries {
    countries {
        id
        name
        codeIso2
        codeIso3
    }
}
";

/// Operation name for [`FlowyCart::get_zones`].
pub const ZONES_OPERATION: &str = "zones";

/// Query document for [`FlowyCart::get_zones`].
pub const ZONES_QUERY: &str = r"
query zones($countryId: String!) {
    zones(countryId: $countryId) {
        id
        name
        code
    }
}
";

impl FlowyCart {
    /// Lists the countries supported by FlowyCart.
    ///
    /// The first successful response is memoized for the lifetime of this
    /// client; later calls return a clone without touching the network.
    /// Concurrent first calls share a single request. Failures are not
    /// memoized.
    ///
    /// # Errors
    ///
    /// See [`FlowyCart::execute`].
    pub async fn get_countries(&self) -> Result<serde_json::Value, FlowyCartError> {
        if let Some(countries) = self.countries.get() {
            tracing::debug!("Serving FlowyCart countries from cache");
            return Ok(countries.clone());
        }

        let countries = self
            .countries
            .get_or_try_init(|| async {
                self.execute(COUNTRIES_QUERY, None, Some(COUNTRIES_OPERATION))
                    .await
            })
            .await?;

        Ok(countries.clone())
    }

    /// Forgets the memoized country list, so the next
    /// [`get_countries`](Self::get_countries) call fetches it again.
    pub fn clear_countries_cache(&mut self) {
        self.countries.take();
    }

    /// Lists the zones of a country.
    ///
    /// # Arguments
    ///
    /// * `country_id` - The FlowyCart country id, as returned by
    ///   [`get_countries`](Self::get_countries)
    ///
    /// # Errors
    ///
    /// See [`FlowyCart::execute`].
    pub async fn get_zones(&self, country_id: &str) -> Result<serde_json::Value, FlowyCartError> {
        self.execute(
            ZONES_QUERY,
            Some(json!({ "countryId": country_id })),
            Some(ZONES_OPERATION),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn countries_body() -> serde_json::Value {
        json!({
            "data": {
                "countries": [
                    {"id": "1", "name": "Spain", "codeIso2": "ES", "codeIso3": "ESP"}
                ]
            }
        })
    }

    #[tokio::test]
    async fn test_countries_are_fetched_once_per_client() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({"operation": "countries", "variables": null})))
            .respond_with(ResponseTemplate::new(200).set_body_json(countries_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = FlowyCart::with_base_url("test-api-key", mock_server.uri()).unwrap();

        assert_eq!(client.get_countries().await.unwrap(), countries_body());
        assert_eq!(client.get_countries().await.unwrap(), countries_body());
    }

    #[tokio::test]
    async fn test_clear_countries_cache_refetches() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(countries_body()))
            .expect(2)
            .mount(&mock_server)
            .await;

        let mut client = FlowyCart::with_base_url("test-api-key", mock_server.uri()).unwrap();

        client.get_countries().await.unwrap();
        client.clear_countries_cache();
        client.get_countries().await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_countries_call_is_not_memoized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("maintenance"))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(countries_body()))
            .mount(&mock_server)
            .await;

        let client = FlowyCart::with_base_url("test-api-key", mock_server.uri()).unwrap();

        assert!(client.get_countries().await.unwrap_err().is_decode());
        assert_eq!(client.get_countries().await.unwrap(), countries_body());
    }

    #[tokio::test]
    async fn test_zones_sends_country_id() {
        let mock_server = MockServer::start().await;
        let zones = json!({"data": {"zones": [{"id": "10", "name": "Madrid", "code": "M"}]}});

        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "variables": {"countryId": "1"},
                "operation": "zones"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(zones.clone()))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = FlowyCart::with_base_url("test-api-key", mock_server.uri()).unwrap();

        // Zones are never memoized
        assert_eq!(client.get_zones("1").await.unwrap(), zones);
        assert_eq!(client.get_zones("1").await.unwrap(), zones);
    }
}
