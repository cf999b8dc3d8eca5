use derive_more::{Display, Error};
use log::error;
use ntex::{http, web};
use serde_json::json;

/// Errors answered by the webhook surface.
///
/// Bodies keep the shape the integration has always exposed to WATI:
/// `{"status": "error", "message": ...}`.
#[derive(Debug, Display, Error)]
pub enum WebhookError {
    UrlNotFound,
    InvalidData,
    OrderCreation,
    MessageSend,
}

impl WebhookError {
    fn message(&self) -> &'static str {
        match self {
            WebhookError::UrlNotFound => "Not found",
            WebhookError::InvalidData => "Invalid data",
            WebhookError::OrderCreation => "Failed to create order",
            WebhookError::MessageSend => "Failed to send message",
        }
    }
}

impl web::error::WebResponseError for WebhookError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        error!("{:#?}", self);

        web::HttpResponse::build(self.status_code()).json(&json!({
            "status": "error",
            "message": self.message(),
        }))
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            WebhookError::UrlNotFound => http::StatusCode::NOT_FOUND,
            WebhookError::InvalidData => http::StatusCode::BAD_REQUEST,
            WebhookError::OrderCreation | WebhookError::MessageSend => {
                http::StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
