//! Webhook handlers for external integrations
//!
//! ## Modules
//!
//! - [`wati`] - WATI chat-commerce webhook receiver
//! - [`errors`] - HTTP error responses for the webhook surface
//! - [`routes`] - route configuration

pub mod errors;
pub mod routes;
pub mod wati;

use crate::services;

/// Per-worker application state: upstream clients plus the secret path token.
pub struct AppState {
    pub commerce: services::ImplCommerceService,
    pub messaging: services::ImplMessagingService,
    pub webhook_token: String,
}
