//! Upstream service clients.
//!
//! Both integrations sit behind async traits so the webhook pipeline can be
//! exercised against mocks. Concrete clients own their `reqwest::Client`
//! and carry the endpoints and credentials they were constructed with.

pub mod commerce;
pub mod messaging;

use async_trait::async_trait;
use derive_more::{Display, Error};

use crate::models;

/// Failure of one outbound call, tagged by cause so callers can tell a
/// transport drop from an upstream rejection from a shape mismatch.
#[derive(Debug, Display, Error)]
pub enum ServiceError {
    /// Connection-level failure before any HTTP status was produced
    #[display("transport error: {_0}")]
    Transport(reqwest::Error),
    /// Upstream answered with a status other than the one signaling success
    #[display("unexpected status {status}: {body}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    /// Payload did not match the expected shape
    #[display("decode error: {_0}")]
    Decode(serde_json::Error),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommerceService {
    /// Places an order; success is exactly the backend's "created" answer.
    async fn create_order(
        &self,
        order: &models::order::OrderRequest,
    ) -> Result<models::order::OrderSummary, ServiceError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagingService {
    /// Sends a plain text message to a phone number.
    async fn send_message(
        &self,
        message: &models::message::OutgoingTextMessage,
    ) -> Result<(), ServiceError>;

    /// Lists contacts one page at a time. Not part of the webhook flow;
    /// kept for operational lookups against the same credentials.
    async fn get_contacts(
        &self,
        page_size: u32,
        page_number: u32,
    ) -> Result<Vec<models::message::Contact>, ServiceError>;
}

pub type ImplCommerceService = Box<dyn CommerceService>;
pub type ImplMessagingService = Box<dyn MessagingService>;
