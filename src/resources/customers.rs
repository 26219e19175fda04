//! Customer creation.
//!
//! The customer is sent nested under a `customer` key, matching the
//! `$customer: CustomerInputType!` parameter of the mutation.

use serde::Serialize;
use serde_json::json;

use crate::client::FlowyCart;
use crate::clients::GraphqlError;
use crate::error::FlowyCartError;

/// Operation name for [`FlowyCart::create_customer`].
pub const CREATE_CUSTOMER_OPERATION: &str = "createCustomer";

/// Mutation document for [`FlowyCart::create_customer`].
pub const CREATE_CUSTOMER_MUTATION: &str = r"
mutation createCustomer($customer: CustomerInputType!) {
    createCustomer(customer: $customer) {
        customer {
            id
            refId
        }
        status
    }
}
";

/// A customer to register with FlowyCart.
///
/// Addresses are passed through as JSON objects; their fields are defined by
/// the FlowyCart schema.
///
/// # Example
///
/// ```rust
/// use flowycart::CustomerInput;
/// use serde_json::json;
///
/// let customer = CustomerInput::new("store-42", "Ada", "Lovelace", "ada@example.com")
///     .address(json!({"address1": "12 St James's Square", "city": "London"}));
///
/// let value = serde_json::to_value(&customer).unwrap();
/// assert_eq!(value["refId"], "store-42");
/// assert_eq!(value["addresses"].as_array().unwrap().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    /// The customer id in the store or e-commerce site.
    pub ref_id: String,
    /// Customer first name.
    pub first_name: String,
    /// Customer last name.
    pub last_name: String,
    /// Customer email.
    pub email: String,
    /// Customer addresses.
    pub addresses: Vec<serde_json::Value>,
}

impl CustomerInput {
    /// Creates a customer with no addresses.
    #[must_use]
    pub fn new(
        ref_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            ref_id: ref_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            addresses: Vec::new(),
        }
    }

    /// Appends an address.
    #[must_use]
    pub fn address(mut self, address: serde_json::Value) -> Self {
        self.addresses.push(address);
        self
    }

    /// Replaces all addresses.
    #[must_use]
    pub fn addresses(mut self, addresses: Vec<serde_json::Value>) -> Self {
        self.addresses = addresses;
        self
    }
}

impl FlowyCart {
    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// See [`FlowyCart::execute`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use flowycart::CustomerInput;
    ///
    /// let customer = CustomerInput::new("store-42", "Ada", "Lovelace", "ada@example.com");
    /// let body = client.create_customer(&customer).await?;
    /// println!("id: {}", body["data"]["createCustomer"]["customer"]["id"]);
    /// ```
    pub async fn create_customer(
        &self,
        customer: &CustomerInput,
    ) -> Result<serde_json::Value, FlowyCartError> {
        self.execute(
            CREATE_CUSTOMER_MUTATION,
            Some(customer_variables(customer)?),
            Some(CREATE_CUSTOMER_OPERATION),
        )
        .await
    }
}

fn customer_variables(customer: &CustomerInput) -> Result<serde_json::Value, GraphqlError> {
    let customer = serde_json::to_value(customer).map_err(GraphqlError::InvalidVariables)?;
    Ok(json!({ "customer": customer }))
}
