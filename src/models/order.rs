//! # WooCommerce Order Wire Types
//!
//! Request and response cover only the fields this bridge writes or reads;
//! WooCommerce's order objects are much larger and the rest is ignored on
//! decode.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::consts;

/// Order-creation request body for `POST /orders`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    /// WooCommerce payment gateway id
    pub payment_method: String,
    pub payment_method_title: String,
    /// Orders are placed unpaid; the customer pays through the link
    pub set_paid: bool,
    pub billing: Billing,
    pub line_items: Vec<LineItem>,
}

/// Billing subset: chat checkout only knows name and phone
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Billing {
    pub first_name: String,
    pub phone: String,
}

/// One purchasable line on the order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Passed through verbatim from the chat catalog's retailer id
    pub product_id: String,
    pub quantity: u32,
}

/// Normalized subset of WooCommerce's order-creation response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderSummary {
    pub id: u64,
    pub status: String,
    pub currency: String,
    /// Creation timestamp as WooCommerce reports it (store-local, no zone)
    pub date_created: NaiveDateTime,
    pub total: String,
    pub billing: Billing,
    /// Secret key WooCommerce embeds in the pay-for-order URL
    pub order_key: String,
}

impl OrderSummary {
    /// Payment link for the hosted order-pay checkout page
    pub fn payment_url(&self) -> String {
        format!(
            "{storefront}/checkout/order-pay/{id}/?pay_for_order=true&key={key}",
            storefront = consts::STOREFRONT_URL,
            id = self.id,
            key = self.order_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // WooCommerce answers with far more fields than the summary keeps;
    // extras here make sure they stay ignored.
    const RESPONSE_BODY: &str = r#"{
        "id": 727,
        "parent_id": 0,
        "status": "pending",
        "currency": "ILS",
        "version": "8.9.1",
        "date_created": "2024-06-01T12:30:00",
        "discount_total": "0.00",
        "total": "250.00",
        "billing": {
            "first_name": "Noa",
            "last_name": "",
            "phone": "+972501234567",
            "email": ""
        },
        "payment_method": "bacs",
        "order_key": "wc_order_5g2Fq7kQ9pZ1x"
    }"#;

    fn test_summary() -> OrderSummary {
        serde_json::from_str(RESPONSE_BODY).unwrap()
    }

    #[test]
    fn test_order_summary_decodes_subset_of_response() {
        let summary = test_summary();

        assert_eq!(summary.id, 727);
        assert_eq!(summary.status, "pending");
        assert_eq!(summary.currency, "ILS");
        assert_eq!(
            summary.date_created,
            NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(12, 30, 0)
                .unwrap()
        );
        assert_eq!(summary.total, "250.00");
        assert_eq!(summary.billing.first_name, "Noa");
        assert_eq!(summary.billing.phone, "+972501234567");
        assert_eq!(summary.order_key, "wc_order_5g2Fq7kQ9pZ1x");
    }

    #[test]
    fn test_payment_url_format() {
        assert_eq!(
            test_summary().payment_url(),
            "https://owltlv.com/checkout/order-pay/727/?pay_for_order=true&key=wc_order_5g2Fq7kQ9pZ1x"
        );
    }

    #[test]
    fn test_order_request_wire_field_names() {
        let request = OrderRequest {
            payment_method: consts::PAYMENT_METHOD_ID.to_string(),
            payment_method_title: consts::PAYMENT_METHOD_TITLE.to_string(),
            set_paid: false,
            billing: Billing {
                first_name: "Noa".to_string(),
                phone: "+972501234567".to_string(),
            },
            line_items: vec![LineItem {
                product_id: "P1".to_string(),
                quantity: 2,
            }],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "payment_method": "bacs",
                "payment_method_title": "Direct Bank Transfer",
                "set_paid": false,
                "billing": {"first_name": "Noa", "phone": "+972501234567"},
                "line_items": [{"product_id": "P1", "quantity": 2}]
            })
        );
    }
}
