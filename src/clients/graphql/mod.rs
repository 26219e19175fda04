//! GraphQL API client for the FlowyCart API.
//!
//! This module provides the request envelope and the client that posts it.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: Executes `(query, variables, operation)` triples
//! - [`GraphqlRequest`]: The `{query, variables, operation}` JSON envelope
//! - [`GraphqlError`]: Error type for GraphQL API operations
//!
//! # Example
//!
//! ```rust,ignore
//! use flowycart::{ApiKey, FlowyCartConfig};
//! use flowycart::clients::graphql::GraphqlClient;
//!
//! let config = FlowyCartConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = GraphqlClient::new(&config);
//! let body = client.execute("query countries { countries { id name } }", None, Some("countries")).await?;
//!
//! // GraphQL errors come back with HTTP 200 and are left in the body
//! if let Some(errors) = body.get("errors") {
//!     println!("GraphQL errors: {}", errors);
//! }
//! ```
//!
//! # Response Structure
//!
//! The response body is whatever the FlowyCart schema returns, typically
//! `{"data": {...}}` or `{"errors": [...]}`. No retries are attempted.

mod client;
mod errors;
mod request;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
pub use request::GraphqlRequest;
