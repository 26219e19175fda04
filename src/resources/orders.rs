//! Order creation.

use serde::{Serialize, Serializer};
use serde_json::json;

use crate::client::FlowyCart;
use crate::clients::GraphqlError;
use crate::error::FlowyCartError;

/// Operation name for [`FlowyCart::create_order`].
pub const CREATE_ORDER_OPERATION: &str = "createOrder";

/// Mutation document for [`FlowyCart::create_order`].
pub const CREATE_ORDER_MUTATION: &str = r"
mutation createOrder($order: OrderInputType!) {
    createOrder(order: $order) {
        order {
            id
            refId
            uuid
            status
        }
    }
}
";

/// Language used when none is set.
pub const DEFAULT_ORDER_LANGUAGE: &str = "en";

/// An order to create in FlowyCart.
///
/// Every field is always serialized: optional fields that were not set are
/// sent as `null`, `intent` defaults to `false` and `language` to `"en"`.
/// Items and metadata entries are passed through as JSON objects.
///
/// # Example
///
/// ```rust
/// use flowycart::OrderInput;
/// use serde_json::json;
///
/// let order = OrderInput::new(
///     vec![json!({"name": "T-shirt", "price": 20.0, "quantity": 2})],
///     "EUR",
///     "https://shop.example.com/success",
///     "https://shop.example.com/cancel",
/// )
/// .ref_id("order-1001")
/// .intent(true);
///
/// let value = serde_json::to_value(&order).unwrap();
/// assert_eq!(value["refId"], "order-1001");
/// assert_eq!(value["language"], "en");
/// assert!(value["customerId"].is_null());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    /// The order id in the store or e-commerce site.
    pub ref_id: Option<String>,
    /// The order items.
    pub items: Vec<serde_json::Value>,
    /// Free-form metadata entries.
    pub metadata: Option<Vec<serde_json::Value>>,
    /// The currency code.
    pub currency: String,
    /// The currency exchange value. Must be finite when set.
    #[serde(serialize_with = "serialize_finite")]
    pub currency_value: Option<f64>,
    /// The FlowyCart customer id.
    pub customer_id: Option<i64>,
    /// Where the customer is sent once the order is processed.
    pub success_url: String,
    /// Where the customer is sent when the order is cancelled.
    pub cancel_url: String,
    /// The order language.
    pub language: String,
    /// Whether the order is created to redirect the customer to the FlowyCart checkout page.
    pub intent: bool,
}

impl OrderInput {
    /// Creates an order from its required fields.
    #[must_use]
    pub fn new(
        items: Vec<serde_json::Value>,
        currency: impl Into<String>,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Self {
        Self {
            ref_id: None,
            items,
            metadata: None,
            currency: currency.into(),
            currency_value: None,
            customer_id: None,
            success_url: success_url.into(),
            cancel_url: cancel_url.into(),
            language: DEFAULT_ORDER_LANGUAGE.to_string(),
            intent: false,
        }
    }

    /// Sets the store's order id.
    #[must_use]
    pub fn ref_id(mut self, ref_id: impl Into<String>) -> Self {
        self.ref_id = Some(ref_id.into());
        self
    }

    /// Sets the FlowyCart customer id.
    #[must_use]
    pub const fn customer_id(mut self, customer_id: i64) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    /// Sets the metadata entries.
    #[must_use]
    pub fn metadata(mut self, metadata: Vec<serde_json::Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Sets the currency exchange value.
    ///
    /// `NaN` and infinities have no JSON form; an order carrying one fails in
    /// [`FlowyCart::create_order`] with [`GraphqlError::InvalidVariables`].
    #[must_use]
    pub const fn currency_value(mut self, currency_value: f64) -> Self {
        self.currency_value = Some(currency_value);
        self
    }

    /// Sets whether the order is a checkout intent.
    #[must_use]
    pub const fn intent(mut self, intent: bool) -> Self {
        self.intent = intent;
        self
    }

    /// Sets the order language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

impl FlowyCart {
    /// Creates an order.
    ///
    /// The order is sent nested under an `order` key.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::InvalidVariables`] (wrapped in
    /// [`FlowyCartError::Graphql`]) without sending anything if
    /// `currency_value` is not finite. Otherwise see [`FlowyCart::execute`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use flowycart::OrderInput;
    /// use serde_json::json;
    ///
    /// let order = OrderInput::new(
    ///     vec![json!({"name": "T-shirt", "price": 20.0, "quantity": 1})],
    ///     "USD",
    ///     "https://shop.example.com/success",
    ///     "https://shop.example.com/cancel",
    /// );
    ///
    /// let body = client.create_order(&order).await?;
    /// println!("uuid: {}", body["data"]["createOrder"]["order"]["uuid"]);
    /// ```
    pub async fn create_order(
        &self,
        order: &OrderInput,
    ) -> Result<serde_json::Value, FlowyCartError> {
        self.execute(
            CREATE_ORDER_MUTATION,
            Some(order_variables(order)?),
            Some(CREATE_ORDER_OPERATION),
        )
        .await
    }
}

fn serialize_finite<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) if !v.is_finite() => Err(serde::ser::Error::custom(format!(
            "currencyValue must be a finite number, got {v}"
        ))),
        _ => value.serialize(serializer),
    }
}

fn order_variables(order: &OrderInput) -> Result<serde_json::Value, GraphqlError> {
    let order = serde_json::to_value(order).map_err(GraphqlError::InvalidVariables)?;
    Ok(json!({ "order": order }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required_only() -> OrderInput {
        OrderInput::new(
            vec![json!({"name": "Mug", "price": 9.5, "quantity": 1})],
            "USD",
            "https://shop.example.com/ok",
            "https://shop.example.com/cancel",
        )
    }

    #[test]
    fn test_required_only_order_keeps_every_key() {
        let variables = order_variables(&required_only()).unwrap();

        assert_eq!(
            variables,
            json!({
                "order": {
                    "refId": null,
                    "items": [{"name": "Mug", "price": 9.5, "quantity": 1}],
                    "metadata": null,
                    "currency": "USD",
                    "currencyValue": null,
                    "customerId": null,
                    "successUrl": "https://shop.example.com/ok",
                    "cancelUrl": "https://shop.example.com/cancel",
                    "language": "en",
                    "intent": false
                }
            })
        );
    }

    #[test]
    fn test_optional_fields_are_serialized() {
        let order = required_only()
            .ref_id("oc-77")
            .customer_id(12)
            .metadata(vec![json!({"key": "channel", "value": "web"})])
            .currency_value(1.08)
            .intent(true)
            .language("es");

        let variables = order_variables(&order).unwrap();
        let order = &variables["order"];

        assert_eq!(order["refId"], "oc-77");
        assert_eq!(order["customerId"], 12);
        assert_eq!(order["metadata"], json!([{"key": "channel", "value": "web"}]));
        assert_eq!(order["currencyValue"], 1.08);
        assert_eq!(order["intent"], true);
        assert_eq!(order["language"], "es");
    }

    #[test]
    fn test_non_finite_currency_value_is_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let order = required_only().currency_value(value);
            match order_variables(&order) {
                Err(GraphqlError::InvalidVariables(e)) => {
                    assert!(e.to_string().contains("currencyValue"));
                }
                other => panic!("Expected InvalidVariables for {value}, got: {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_create_order_with_infinite_currency_value_sends_nothing() {
        // Nothing listens on port 1, so a sent request would be a transport error.
        let client = FlowyCart::with_base_url("test-api-key", "http://127.0.0.1:1/api/graphql").unwrap();
        let order = required_only().currency_value(f64::INFINITY);

        let error = client.create_order(&order).await.unwrap_err();

        assert!(matches!(
            error,
            FlowyCartError::Graphql(GraphqlError::InvalidVariables(_))
        ));
        assert!(!error.is_transport());
    }
}
