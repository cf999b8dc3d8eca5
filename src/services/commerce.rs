//! # WooCommerce REST Client
//!
//! Creates orders against the store's REST API, authenticated with the
//! consumer key/secret pair over basic auth.

use async_trait::async_trait;
use log::debug;

use super::{CommerceService, ServiceError};
use crate::{config::AppConfig, consts, models};

/// Client for the WooCommerce orders API
#[derive(Clone)]
pub struct WooCommerceClient {
    /// HTTP client for making API requests
    client: reqwest::Client,
    orders_endpoint: String,
    consumer_key: String,
    consumer_secret: String,
}

impl WooCommerceClient {
    /// Creates a client bound to the configured store
    pub fn new(app_config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent(consts::OUTBOUND_USER_AGENT)
                .build()?,
            orders_endpoint: app_config.wc_orders_endpoint(),
            consumer_key: app_config.wc_consumer_key.clone(),
            consumer_secret: app_config.wc_consumer_secret.clone(),
        })
    }
}

#[async_trait]
impl CommerceService for WooCommerceClient {
    async fn create_order(
        &self,
        order: &models::order::OrderRequest,
    ) -> Result<models::order::OrderSummary, ServiceError> {
        let response = self
            .client
            .post(&self.orders_endpoint)
            .basic_auth(&self.consumer_key, Some(&self.consumer_secret))
            .json(order)
            .send()
            .await
            .map_err(ServiceError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(ServiceError::Transport)?;
        debug!("WooCommerce API response: {status} - {body}");

        // Anything but 201 is a rejected order, including 200
        if status != reqwest::StatusCode::CREATED {
            return Err(ServiceError::UnexpectedStatus { status, body });
        }

        serde_json::from_str(&body).map_err(ServiceError::Decode)
    }
}
