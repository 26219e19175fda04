//! HTTP client types for FlowyCart API communication.
//!
//! This module provides the transport layer used by
//! [`FlowyCart`](crate::FlowyCart): one JSON POST per call, with the API key
//! attached and the response decoded as JSON.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client that posts JSON bodies
//! - [`HttpResponse`]: A decoded response (status, headers, JSON body)
//! - [`HttpError`]: Transport, decode and status failures
//! - [`graphql::GraphqlClient`]: Executes GraphQL documents over [`HttpClient`]
//! - [`graphql::GraphqlRequest`]: The `{query, variables, operation}` envelope
//!
//! # Retry Behavior
//!
//! There is none. Every call is a single request; failures surface to the
//! caller immediately.

mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::{DecodeError, HttpError, HttpStatusError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::HttpResponse;

pub use graphql::{GraphqlClient, GraphqlError, GraphqlRequest};
