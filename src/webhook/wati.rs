//! WATI webhook endpoint
//!
//! The receiver is mounted under a secret path segment; the token is the
//! only caller authentication there is. WATI posts a contact event here
//! when a chat cart is submitted, and the bridge answers once the order is
//! placed and the payment link is on its way back to the customer.

use log::{debug, error, info};
use ntex::{util::Bytes, web};
use serde_json::json;

use super::{AppState, errors::WebhookError};
use crate::{api, models::customer::WebhookPayload};

/// Webhook receiver endpoint (POST)
///
/// Validates the path token, extracts `client_data`, creates the order and
/// replies to the customer with the payment link.
///
/// # Returns
/// - 200 with the order id on success
/// - 400 if the body is not a JSON object carrying `client_data`
/// - 404 if the path token does not match the configured one
/// - 500 if order creation or the notification send fails
#[web::post("/{token}")]
pub async fn receive(
    path: web::types::Path<String>,
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    if *path != app_state.webhook_token {
        return Err(WebhookError::UrlNotFound.into());
    }

    let payload: WebhookPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            error!("Invalid data received in webhook: {e}");
            return Err(WebhookError::InvalidData.into());
        }
    };

    let order_id = process_webhook(payload, &app_state).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "status": "success",
        "order_id": order_id,
    })))
}

/// Runs the order pipeline for one webhook payload.
///
/// Kept separate from the route so the flow is testable against mocked
/// services.
pub async fn process_webhook(
    payload: WebhookPayload,
    app_state: &AppState,
) -> Result<u64, WebhookError> {
    info!("Received WATI webhook");
    debug!("Webhook payload: {payload:?}");

    let Some(client_data) = payload.client_data else {
        error!("Invalid data received in webhook: missing client_data");
        return Err(WebhookError::InvalidData);
    };

    let order = match api::order::create_order(client_data, &app_state.commerce).await {
        Ok(order) => order,
        Err(e) => {
            error!("Failed to create order: {e}");
            return Err(WebhookError::OrderCreation);
        }
    };

    if let Err(e) = api::notify::send_payment_link(&order, &app_state.messaging).await {
        error!("Failed to send message: {e}");
        return Err(WebhookError::MessageSend);
    }

    info!("Webhook processed: order_id={}", order.id);

    Ok(order.id)
}
