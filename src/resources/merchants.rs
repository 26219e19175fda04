//! Merchant connection.

use serde_json::json;

use crate::client::FlowyCart;
use crate::error::FlowyCartError;

/// Operation name for [`FlowyCart::connect`].
pub const CONNECT_MERCHANT_OPERATION: &str = "connectMerchant";

/// Mutation document for [`FlowyCart::connect`].
pub const CONNECT_MERCHANT_MUTATION: &str = r"
mutation connectMerchant($vendor: String!, $baseUrl: String!) {
    connectMerchant(vendor: $vendor, baseUrl: $baseUrl) {
        status
        token
    }
}
";

impl FlowyCart {
    /// Connects a merchant platform to FlowyCart.
    ///
    /// # Arguments
    ///
    /// * `vendor` - The merchant platform name, for example `"OpenCart"`
    /// * `base_url` - The vendor's API base URL, if any. Sent as `null` when absent.
    ///
    /// # Errors
    ///
    /// See [`FlowyCart::execute`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let body = client.connect("OpenCart", Some("https://shop.example.com")).await?;
    /// println!("token: {}", body["data"]["connectMerchant"]["token"]);
    /// ```
    pub async fn connect(
        &self,
        vendor: &str,
        base_url: Option<&str>,
    ) -> Result<serde_json::Value, FlowyCartError> {
        self.execute(
            CONNECT_MERCHANT_MUTATION,
            Some(connect_variables(vendor, base_url)),
            Some(CONNECT_MERCHANT_OPERATION),
        )
        .await
    }
}

fn connect_variables(vendor: &str, base_url: Option<&str>) -> serde_json::Value {
    json!({
        "vendor": vendor,
        "baseUrl": base_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_variables_without_base_url_sends_null() {
        assert_eq!(
            connect_variables("OpenCart", None),
            json!({"vendor": "OpenCart", "baseUrl": null})
        );
    }

    #[test]
    fn test_connect_variables_with_base_url() {
        assert_eq!(
            connect_variables("WooCommerce", Some("https://shop.example.com/wp-json")),
            json!({"vendor": "WooCommerce", "baseUrl": "https://shop.example.com/wp-json"})
        );
    }

    #[test]
    fn test_mutation_declares_operation() {
        assert!(CONNECT_MERCHANT_MUTATION.contains("mutation connectMerchant("));
    }
}
