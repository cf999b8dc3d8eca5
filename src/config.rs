//! Application configuration.
//!
//! All values are read from the environment once at startup and passed by
//! value into the components that need them. There is no process-global
//! configuration state; handlers get what they need through
//! [`crate::webhook::AppState`], clients through their constructors.

use envconfig::Envconfig;

/// Environment-sourced configuration for the bridge.
///
/// Missing required variables abort startup with a descriptive error.
///
/// # Security Requirements
/// - All `SENSITIVE` fields must be stored securely (encrypted at rest)
/// - Never log or expose sensitive values
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name (NON-SENSITIVE)
    /// Values: "local", "dev", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Host address for web server binding (NON-SENSITIVE)
    #[envconfig(default = "0.0.0.0")]
    pub web_server_host: String,

    /// Port for web server binding (NON-SENSITIVE)
    #[envconfig(default = "5000")]
    pub web_server_port: u16,

    /// WooCommerce REST base URL (NON-SENSITIVE)
    /// Example: "https://owltlv.com/wp-json/wc/v3"
    pub wc_api_url: String,

    /// 🔒 SENSITIVE: WooCommerce consumer key (basic-auth user)
    pub wc_consumer_key: String,

    /// 🔒 SENSITIVE: WooCommerce consumer secret (basic-auth password)
    pub wc_consumer_secret: String,

    /// WATI API base URL, tenant-specific (NON-SENSITIVE)
    /// Example: "https://live-server-1234.wati.io/api/v1"
    pub wati_api_url: String,

    /// 🔒 SENSITIVE: WATI API key, sent verbatim in the Authorization header
    pub wati_api_key: String,

    /// 🔒 SENSITIVE: secret path segment the webhook is mounted under.
    /// The only inbound caller "authentication" there is.
    pub webhook_token: String,
}

impl AppConfig {
    /// Checks if running in production environment
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }

    /// WooCommerce order-creation endpoint
    pub fn wc_orders_endpoint(&self) -> String {
        format!("{}/orders", self.wc_api_url)
    }

    /// WATI send-message endpoint
    pub fn wati_send_message_endpoint(&self) -> String {
        format!("{}/sendMessage", self.wati_api_url)
    }

    /// WATI contact-listing endpoint
    pub fn wati_get_contacts_endpoint(&self) -> String {
        format!("{}/getContacts", self.wati_api_url)
    }
}
