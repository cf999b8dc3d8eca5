//! # Inbound WATI Webhook Schemas
//!
//! WATI posts one JSON object per event. The bridge only cares about the
//! `client_data` branch carrying the contact attributes; everything else in
//! the payload is ignored on decode.

use serde::{Deserialize, Serialize};

/// Root webhook payload from WATI
///
/// `client_data` is kept as a raw JSON value here: its presence is checked
/// at the HTTP surface, its shape is decoded inside the order pipeline, so
/// a malformed inner shape fails the order attempt rather than the request.
#[derive(Debug, Deserialize, Serialize)]
pub struct WebhookPayload {
    /// Contact attributes; absent on event kinds this bridge rejects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_data: Option<serde_json::Value>,
}

/// Contact attributes attached to the webhook
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientData {
    /// Contact's first name, used for billing and the greeting
    pub first_name: String,
    /// Contact's phone number in international format
    pub phone: String,
    /// Ordered name/value pairs attached to the contact record
    #[serde(default)]
    pub custom_params: Vec<CustomParam>,
}

/// One named value attached to a WATI contact
#[derive(Debug, Deserialize, Serialize)]
pub struct CustomParam {
    pub name: String,
    pub value: String,
}

/// One cart line from the JSON-encoded cart parameter
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CartItem {
    /// Product id as the chat catalog knows it; WooCommerce's product_id
    #[serde(rename = "ProductRetailerId")]
    pub product_retailer_id: String,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
}

impl ClientData {
    /// Looks up a custom parameter value by name
    pub fn custom_param(&self, name: &str) -> Option<&str> {
        self.custom_params
            .iter()
            .find(|param| param.name == name)
            .map(|param| param.value.as_str())
    }
}
