//! FlowyCart API operations.
//!
//! Each submodule adds methods to [`FlowyCart`](crate::FlowyCart) for one
//! resource and exports the GraphQL document it sends:
//!
//! | Method | Operation | Variables |
//! |---|---|---|
//! | [`connect`](crate::FlowyCart::connect) | `connectMerchant` | `{vendor, baseUrl}` |
//! | [`create_customer`](crate::FlowyCart::create_customer) | `createCustomer` | `{customer: {...}}` |
//! | [`create_order`](crate::FlowyCart::create_order) | `createOrder` | `{order: {...}}` |
//! | [`get_countries`](crate::FlowyCart::get_countries) | `countries` | none |
//! | [`get_zones`](crate::FlowyCart::get_zones) | `zones` | `{countryId}` |
//!
//! Field contents are not validated locally; the remote API's error payload
//! is returned as-is.

pub mod customers;
pub mod locations;
pub mod merchants;
pub mod models;
pub mod orders;

pub use customers::CustomerInput;
pub use models::{
    ConnectMerchantData, ConnectMerchantPayload, CountriesData, Country, CreateCustomerData,
    CreateCustomerPayload, CreateOrderData, CreateOrderPayload, CustomerRef, GraphqlResponse,
    OrderRef, Zone, ZonesData,
};
pub use orders::OrderInput;
