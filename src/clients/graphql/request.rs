//! The JSON envelope posted for every GraphQL call.

use serde::Serialize;

/// A GraphQL request envelope.
///
/// Serializes to `{"query": ..., "variables": ..., "operation": ...}`. All
/// three keys are always present; `variables` and `operation` are `null`
/// when not supplied.
///
/// # Example
///
/// ```rust
/// use flowycart::clients::graphql::GraphqlRequest;
/// use serde_json::json;
///
/// let request = GraphqlRequest::new("query countries { countries { id } }")
///     .operation("countries");
///
/// assert_eq!(
///     serde_json::to_value(&request).unwrap(),
///     json!({
///         "query": "query countries { countries { id } }",
///         "variables": null,
///         "operation": "countries"
///     })
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphqlRequest<'a> {
    /// The GraphQL document.
    pub query: &'a str,
    /// Variables bound to the document's parameters.
    pub variables: Option<serde_json::Value>,
    /// The operation name within the document.
    pub operation: Option<&'a str>,
}

impl<'a> GraphqlRequest<'a> {
    /// Creates an envelope with no variables and no operation name.
    #[must_use]
    pub const fn new(query: &'a str) -> Self {
        Self {
            query,
            variables: None,
            operation: None,
        }
    }

    /// Sets the variables payload.
    #[must_use]
    pub fn variables(mut self, variables: serde_json::Value) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Sets the operation name.
    #[must_use]
    pub const fn operation(mut self, operation: &'a str) -> Self {
        self.operation = Some(operation);
        self
    }
}
