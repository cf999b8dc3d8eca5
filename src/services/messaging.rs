//! # WATI API Client
//!
//! Sends messages through the WATI REST API and exposes the contact
//! listing. The API key goes verbatim into the `Authorization` header,
//! which is how WATI authenticates callers.

use async_trait::async_trait;
use log::debug;

use super::{MessagingService, ServiceError};
use crate::{config::AppConfig, models};

/// Client for the WATI REST API
#[derive(Clone)]
pub struct WatiClient {
    /// HTTP client for making API requests
    client: reqwest::Client,
    send_message_endpoint: String,
    get_contacts_endpoint: String,
    api_key: String,
}

impl WatiClient {
    /// Creates a client bound to the configured WATI tenant
    pub fn new(app_config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            send_message_endpoint: app_config.wati_send_message_endpoint(),
            get_contacts_endpoint: app_config.wati_get_contacts_endpoint(),
            api_key: app_config.wati_api_key.clone(),
        }
    }
}

#[async_trait]
impl MessagingService for WatiClient {
    async fn send_message(
        &self,
        message: &models::message::OutgoingTextMessage,
    ) -> Result<(), ServiceError> {
        let response = self
            .client
            .post(&self.send_message_endpoint)
            .header("Authorization", &self.api_key)
            .json(message)
            .send()
            .await
            .map_err(ServiceError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(ServiceError::Transport)?;
        debug!("WATI sendMessage response: {status} - {body}");

        if status != reqwest::StatusCode::OK {
            return Err(ServiceError::UnexpectedStatus { status, body });
        }

        Ok(())
    }

    async fn get_contacts(
        &self,
        page_size: u32,
        page_number: u32,
    ) -> Result<Vec<models::message::Contact>, ServiceError> {
        let response = self
            .client
            .get(&self.get_contacts_endpoint)
            .query(&[("pageSize", page_size), ("pageNumber", page_number)])
            .header("Authorization", &self.api_key)
            .header("accept", "*/*")
            .send()
            .await
            .map_err(ServiceError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(ServiceError::Transport)?;
        debug!("WATI getContacts response: {status} - {body}");

        if status != reqwest::StatusCode::OK {
            return Err(ServiceError::UnexpectedStatus { status, body });
        }

        let contacts: models::message::ContactListResponse =
            serde_json::from_str(&body).map_err(ServiceError::Decode)?;

        Ok(contacts.contact_list)
    }
}
