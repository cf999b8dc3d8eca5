//! # Order Bridge
//!
//! Main entry point for the WATI → WooCommerce order bridge. Loads
//! configuration, wires the upstream clients and serves the webhook.

use anyhow::Context;
use envconfig::Envconfig;
use ntex::web;

use order_bridge::{
    config::AppConfig,
    logger,
    services::{commerce::WooCommerceClient, messaging::WatiClient},
    webhook,
};

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    let app_config = AppConfig::init_from_env().context("failed to load app config")?;

    logger::setup_simple_logger(app_config.is_prod())?;

    let commerce = WooCommerceClient::new(&app_config)?;
    let messaging = WatiClient::new(&app_config);

    configure_and_run_server(app_config, commerce, messaging).await
}

/// Creates per-worker application state from the shared clients
fn create_app_state(
    commerce: WooCommerceClient,
    messaging: WatiClient,
    webhook_token: String,
) -> webhook::AppState {
    webhook::AppState {
        commerce: Box::new(commerce),
        messaging: Box::new(messaging),
        webhook_token,
    }
}

/// Configures and starts the web server
async fn configure_and_run_server(
    app_config: AppConfig,
    commerce: WooCommerceClient,
    messaging: WatiClient,
) -> anyhow::Result<()> {
    let host = app_config.web_server_host.clone();
    let port = app_config.web_server_port;
    let webhook_token = app_config.webhook_token.clone();

    web::server(move || {
        web::App::new()
            .wrap(web::middleware::Logger::default())
            .state(create_app_state(
                commerce.clone(),
                messaging.clone(),
                webhook_token.clone(),
            ))
            .configure(webhook::routes::wati)
            .default_service(web::route().to(serve_not_found))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {e}"))
}

async fn serve_not_found() -> Result<web::HttpResponse, web::Error> {
    Err(webhook::errors::WebhookError::UrlNotFound.into())
}
