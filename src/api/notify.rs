//! Customer notification with the payment link.

use log::info;

use crate::{
    models::{message::OutgoingTextMessage, order::OrderSummary},
    services::{ImplMessagingService, ServiceError},
};

/// Builds the greeting message pointing at the hosted payment page.
pub fn payment_link_message(order: &OrderSummary) -> OutgoingTextMessage {
    OutgoingTextMessage {
        phone: order.billing.phone.clone(),
        message: format!(
            "Hi {name}, your order #{id} has been created. You can pay using the following link: {link}",
            name = order.billing.first_name,
            id = order.id,
            link = order.payment_url()
        ),
    }
}

/// Sends the payment-link message for a freshly created order.
pub async fn send_payment_link(
    order: &OrderSummary,
    messaging: &ImplMessagingService,
) -> Result<(), ServiceError> {
    info!("Sending WATI message...");

    let message = payment_link_message(order);
    messaging.send_message(&message).await?;

    info!("Message sent successfully.");

    Ok(())
}
