//! GraphQL-specific error types for the FlowyCart SDK.
//!
//! Only SDK-side failures are errors. GraphQL-level errors (validation
//! errors, business rule failures) come back in the response body's `errors`
//! field and are returned to the caller untouched.
//!
//! # Example
//!
//! ```rust,ignore
//! use flowycart::clients::graphql::{GraphqlClient, GraphqlError};
//!
//! match client.execute("query countries { countries { id } }", None, Some("countries")).await {
//!     Ok(body) => {
//!         if let Some(errors) = body.get("errors") {
//!             println!("GraphQL errors: {}", errors);
//!         }
//!     }
//!     Err(GraphqlError::Http(e)) => println!("HTTP error: {}", e),
//!     Err(GraphqlError::InvalidVariables(e)) => println!("Bad input: {}", e),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL API operations.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred.
    ///
    /// Includes transport failures, undecodable bodies and, when enabled,
    /// non-2xx statuses.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Typed input could not be converted into a variables payload.
    #[error("Failed to serialize GraphQL variables: {0}")]
    InvalidVariables(#[source] serde_json::Error),
}
