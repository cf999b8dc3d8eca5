//! Order creation pipeline.
//!
//! Takes the webhook's `client_data` value, recovers the cart the contact
//! last submitted, and places the matching unpaid order on WooCommerce.

use log::{debug, info};

use crate::{
    consts,
    models::{
        self,
        customer::{CartItem, ClientData},
    },
    services::{ImplCommerceService, ServiceError},
};

/// Recovers the cart lines from the contact's custom parameters.
///
/// An absent parameter means an empty cart; a present parameter that does
/// not decode fails the whole attempt.
pub fn extract_cart_items(client_data: &ClientData) -> Result<Vec<CartItem>, ServiceError> {
    let Some(raw) = client_data.custom_param(consts::CART_ITEMS_PARAM) else {
        return Ok(Vec::new());
    };

    serde_json::from_str(raw).map_err(ServiceError::Decode)
}

/// Maps contact attributes and cart lines to the order-creation request.
pub fn build_order_request(
    client_data: &ClientData,
    cart_items: &[CartItem],
) -> models::order::OrderRequest {
    models::order::OrderRequest {
        payment_method: consts::PAYMENT_METHOD_ID.to_string(),
        payment_method_title: consts::PAYMENT_METHOD_TITLE.to_string(),
        set_paid: false,
        billing: models::order::Billing {
            first_name: client_data.first_name.clone(),
            phone: client_data.phone.clone(),
        },
        line_items: cart_items
            .iter()
            .map(|item| models::order::LineItem {
                product_id: item.product_retailer_id.clone(),
                quantity: item.quantity,
            })
            .collect(),
    }
}

/// Creates a WooCommerce order from the webhook's `client_data` value.
///
/// The raw value is decoded here rather than at the HTTP surface: a payload
/// with `client_data` present but malformed is an order-pipeline failure,
/// not a malformed request.
pub async fn create_order(
    client_data: serde_json::Value,
    commerce: &ImplCommerceService,
) -> Result<models::order::OrderSummary, ServiceError> {
    info!("Creating WooCommerce order...");

    let client_data: ClientData =
        serde_json::from_value(client_data).map_err(ServiceError::Decode)?;
    let cart_items = extract_cart_items(&client_data)?;

    debug!(
        "Customer data extracted: first_name={}, phone={}, cart_items={}",
        client_data.first_name,
        client_data.phone,
        cart_items.len()
    );

    let order_request = build_order_request(&client_data, &cart_items);
    let summary = commerce.create_order(&order_request).await?;

    info!("Order created successfully: id={}", summary.id);

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::{Billing, LineItem, OrderSummary};
    use crate::services::MockCommerceService;
    use chrono::NaiveDate;
    use serde_json::json;

    fn test_client_data(cart_value: Option<&str>) -> serde_json::Value {
        let mut custom_params = vec![json!({"name": "source", "value": "whatsapp"})];
        if let Some(value) = cart_value {
            custom_params.push(json!({"name": "last_cart_items", "value": value}));
        }

        json!({
            "firstName": "Noa",
            "phone": "+972501234567",
            "customParams": custom_params,
        })
    }

    fn test_summary(id: u64) -> OrderSummary {
        OrderSummary {
            id,
            status: "pending".to_string(),
            currency: "ILS".to_string(),
            date_created: NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(12, 30, 0)
                .unwrap(),
            total: "250.00".to_string(),
            billing: Billing {
                first_name: "Noa".to_string(),
                phone: "+972501234567".to_string(),
            },
            order_key: "wc_order_abc123".to_string(),
        }
    }

    #[test]
    fn test_extract_cart_items_absent_defaults_to_empty() {
        let client_data: ClientData = serde_json::from_value(test_client_data(None)).unwrap();

        let items = extract_cart_items(&client_data).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_extract_cart_items_decodes_entries() {
        let client_data: ClientData = serde_json::from_value(test_client_data(Some(
            r#"[{"ProductRetailerId":"P1","Quantity":2}]"#,
        )))
        .unwrap();

        let items = extract_cart_items(&client_data).unwrap();
        assert_eq!(
            items,
            vec![CartItem {
                product_retailer_id: "P1".to_string(),
                quantity: 2
            }]
        );
    }

    #[test]
    fn test_extract_cart_items_malformed_is_decode_error() {
        let client_data: ClientData =
            serde_json::from_value(test_client_data(Some("[{not json"))).unwrap();

        assert!(matches!(
            extract_cart_items(&client_data),
            Err(ServiceError::Decode(_))
        ));
    }

    #[test]
    fn test_build_order_request_maps_cart_and_billing() {
        let client_data: ClientData = serde_json::from_value(test_client_data(None)).unwrap();
        let cart = vec![CartItem {
            product_retailer_id: "P1".to_string(),
            quantity: 2,
        }];

        let request = build_order_request(&client_data, &cart);

        assert_eq!(request.payment_method, "bacs");
        assert_eq!(request.payment_method_title, "Direct Bank Transfer");
        assert!(!request.set_paid);
        assert_eq!(
            request.billing,
            Billing {
                first_name: "Noa".to_string(),
                phone: "+972501234567".to_string(),
            }
        );
        assert_eq!(
            request.line_items,
            vec![LineItem {
                product_id: "P1".to_string(),
                quantity: 2
            }]
        );
    }

    #[ntex::test]
    async fn test_create_order_submits_mapped_request() {
        let mut commerce = MockCommerceService::new();
        commerce
            .expect_create_order()
            .withf(|order| {
                order.billing.first_name == "Noa"
                    && order.billing.phone == "+972501234567"
                    && order.line_items
                        == vec![LineItem {
                            product_id: "P1".to_string(),
                            quantity: 2,
                        }]
            })
            .times(1)
            .returning(|_| Ok(test_summary(77)));
        let commerce: ImplCommerceService = Box::new(commerce);

        let result = create_order(
            test_client_data(Some(r#"[{"ProductRetailerId":"P1","Quantity":2}]"#)),
            &commerce,
        )
        .await;

        assert_eq!(result.unwrap().id, 77);
    }

    #[ntex::test]
    async fn test_create_order_non_created_status_is_reported() {
        let mut commerce = MockCommerceService::new();
        commerce.expect_create_order().times(1).returning(|_| {
            Err(ServiceError::UnexpectedStatus {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                body: "upstream error".to_string(),
            })
        });
        let commerce: ImplCommerceService = Box::new(commerce);

        let result = create_order(test_client_data(None), &commerce).await;
        assert!(matches!(
            result,
            Err(ServiceError::UnexpectedStatus { .. })
        ));
    }

    #[ntex::test]
    async fn test_create_order_malformed_cart_never_reaches_backend() {
        // No expectations: any call on the mock fails the test
        let commerce: ImplCommerceService = Box::new(MockCommerceService::new());

        let result = create_order(test_client_data(Some("{broken")), &commerce).await;
        assert!(matches!(result, Err(ServiceError::Decode(_))));
    }

    #[ntex::test]
    async fn test_create_order_missing_first_name_is_decode_error() {
        let commerce: ImplCommerceService = Box::new(MockCommerceService::new());

        let result = create_order(json!({"phone": "+972501234567"}), &commerce).await;
        assert!(matches!(result, Err(ServiceError::Decode(_))));
    }
}
