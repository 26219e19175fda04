//! Typed views over FlowyCart responses.
//!
//! Every [`FlowyCart`](crate::FlowyCart) method returns the raw JSON body.
//! These models are an opt-in way to decode the fields selected by the
//! SDK's documents:
//!
//! ```rust
//! use flowycart::{CountriesData, GraphqlResponse};
//! use serde_json::json;
//!
//! let body = json!({
//!     "data": {"countries": [{"id": "1", "name": "Spain", "codeIso2": "ES", "codeIso3": "ESP"}]}
//! });
//!
//! let response = GraphqlResponse::<CountriesData>::from_value(body).unwrap();
//! let countries = response.data.unwrap().countries;
//! assert_eq!(countries[0].code_iso2, "ES");
//! ```

use serde::{de::DeserializeOwned, Deserialize};

/// A GraphQL response body split into `data` and `errors`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphqlResponse<T> {
    /// The query result, if any.
    pub data: Option<T>,
    /// GraphQL errors reported by the server, left uninterpreted.
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

impl<T: DeserializeOwned> GraphqlResponse<T> {
    /// Decodes a response body.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body does not match `T`.
    pub fn from_value(body: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(body)
    }
}

impl<T> GraphqlResponse<T> {
    /// Returns `true` if the server reported no GraphQL errors.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A country as selected by the countries query.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// FlowyCart id of the country.
    pub id: String,
    /// English country name.
    pub name: String,
    /// ISO 3166-1 alpha-2 code, e.g. `ES`.
    pub code_iso2: String,
    /// ISO 3166-1 alpha-3 code, e.g. `ESP`.
    pub code_iso3: String,
}

/// `data` of the countries query.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CountriesData {
    /// Every country FlowyCart supports.
    pub countries: Vec<Country>,
}

/// A zone (state, province, region) of a country.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Zone {
    /// FlowyCart id of the zone.
    pub id: String,
    /// Zone name.
    pub name: String,
    /// Zone code within its country.
    pub code: String,
}

/// `data` of the zones query.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ZonesData {
    /// Zones of the requested country.
    pub zones: Vec<Zone>,
}

/// Result of connecting a merchant.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ConnectMerchantPayload {
    /// Status object returned by FlowyCart; its shape is not fixed.
    pub status: serde_json::Value,
    /// Merchant token, present when the connection succeeded.
    pub token: Option<String>,
}

/// `data` of the connect merchant mutation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectMerchantData {
    /// `null` when the mutation failed.
    pub connect_merchant: Option<ConnectMerchantPayload>,
}

/// Identifiers of a created customer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRef {
    /// FlowyCart customer id.
    pub id: String,
    /// The customer id in the store, as sent in `refId`.
    pub ref_id: Option<String>,
}

/// Result of creating a customer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CreateCustomerPayload {
    /// The created customer, absent on failure.
    pub customer: Option<CustomerRef>,
    /// Status object returned by FlowyCart; its shape is not fixed.
    pub status: serde_json::Value,
}

/// `data` of the create customer mutation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerData {
    /// `null` when the mutation failed.
    pub create_customer: Option<CreateCustomerPayload>,
}

/// Identifiers and state of a created order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRef {
    /// FlowyCart order id.
    pub id: String,
    /// The order id in the store, as sent in `refId`.
    pub ref_id: Option<String>,
    /// Public order uuid used by the checkout page.
    pub uuid: Option<String>,
    /// Order status; its shape is not fixed.
    pub status: serde_json::Value,
}

/// Result of creating an order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CreateOrderPayload {
    /// The created order, absent on failure.
    pub order: Option<OrderRef>,
}

/// `data` of the create order mutation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderData {
    /// `null` when the mutation failed.
    pub create_order: Option<CreateOrderPayload>,
}
