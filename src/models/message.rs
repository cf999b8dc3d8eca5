//! # WATI Messaging Wire Types

use serde::{Deserialize, Serialize};

/// Body for `POST /sendMessage`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutgoingTextMessage {
    /// Recipient phone number in international format
    pub phone: String,
    /// Plain-text message body
    pub message: String,
}

/// Envelope for `GET /getContacts`
#[derive(Debug, Deserialize, Serialize)]
pub struct ContactListResponse {
    pub contact_list: Vec<Contact>,
}

/// Minimal WATI contact record
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// WhatsApp number of the contact
    #[serde(rename = "wAid", skip_serializing_if = "Option::is_none")]
    pub wa_id: Option<String>,
    #[serde(rename = "fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_list_deserialization() {
        let json = r#"{
            "contact_list": [
                {"id": "661f", "wAid": "972501234567", "fullName": "Noa Levi", "source": null}
            ],
            "link": ""
        }"#;

        let response: ContactListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.contact_list.len(), 1);
        assert_eq!(
            response.contact_list[0].wa_id.as_deref(),
            Some("972501234567")
        );
    }

    #[test]
    fn test_outgoing_message_wire_names() {
        let message = OutgoingTextMessage {
            phone: "+972501234567".to_string(),
            message: "Hi".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            serde_json::json!({"phone": "+972501234567", "message": "Hi"})
        );
    }
}
