//! # FlowyCart Rust SDK
//!
//! A Rust SDK for the FlowyCart payments API. It wraps FlowyCart's GraphQL
//! endpoint with typed methods for connecting merchants, creating customers
//! and orders, and listing countries and zones.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`FlowyCartConfig`] and [`FlowyCartConfigBuilder`]
//! - Validated newtypes for the API key and the endpoint URL
//! - The [`FlowyCart`] client with one method per API operation
//! - A raw [`FlowyCart::execute`] escape hatch for any other document
//! - Optional typed response models such as [`Country`] and [`Zone`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use flowycart::{FlowyCart, OrderInput};
//! use serde_json::json;
//!
//! let client = FlowyCart::new("your-api-key")?;
//!
//! let order = OrderInput::new(
//!     vec![json!({"name": "T-shirt", "price": 20.0, "quantity": 1})],
//!     "USD",
//!     "https://shop.example.com/success",
//!     "https://shop.example.com/cancel",
//! )
//! .intent(true);
//!
//! let body = client.create_order(&order).await?;
//! if let Some(errors) = body.get("errors") {
//!     eprintln!("FlowyCart rejected the order: {errors}");
//! }
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use std::time::Duration;
//! use flowycart::{ApiKey, BaseUrl, FlowyCart, FlowyCartConfig};
//!
//! let config = FlowyCartConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .base_url(BaseUrl::new("https://sandbox.example.com/api/graphql").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .user_agent_prefix("MyShop/1.0")
//!     .build()
//!     .unwrap();
//!
//! let client = FlowyCart::from_config(&config);
//! ```
//!
//! ## Responses and Errors
//!
//! Methods return the decoded JSON body exactly as FlowyCart sent it,
//! including any GraphQL `errors`. A [`FlowyCartError`] is returned only
//! when the request could not be completed (transport failure, timeout) or
//! the body was not JSON. Non-2xx statuses are passed through unless
//! [`FlowyCartConfigBuilder::error_on_http_status`] is enabled. Nothing is
//! retried.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

pub use client::FlowyCart;
pub use config::{
    ApiKey, BaseUrl, FlowyCartConfig, FlowyCartConfigBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
};
pub use error::{ConfigError, FlowyCartError};

// Re-export client types
pub use clients::{
    DecodeError, GraphqlClient, GraphqlError, GraphqlRequest, HttpClient, HttpError,
    HttpResponse, HttpStatusError,
};

// Re-export resource inputs and response models
pub use resources::{
    ConnectMerchantData, ConnectMerchantPayload, CountriesData, Country, CreateCustomerData,
    CreateCustomerPayload, CreateOrderData, CreateOrderPayload, CustomerInput, CustomerRef,
    GraphqlResponse, OrderInput, OrderRef, Zone, ZonesData,
};
