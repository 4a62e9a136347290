//! # WhatsApp Relay
//!
//! Main entry point for the WhatsApp Business API relay server. Loads the
//! configuration, sets up logging, and starts the HTTP listener. The server
//! runs until terminated externally.

pub mod api;
pub mod config;
pub mod consts;
pub mod errors;
pub mod logger;
pub mod webhook;
pub mod whatsapp;

use envconfig::Envconfig;
use ntex::web;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    let app_config = config::AppConfig::init_from_env()
        .map_err(|e| anyhow::anyhow!("Failed to load application configuration: {e}"))?;

    logger::setup_simple_logger()?;

    log::info!(
        "HTTP server running on port {}",
        app_config.web_server_port
    );

    run_server(app_config).await
}

/// Returns the 404 response for every unregistered (method, path) pair
pub async fn serve_not_found() -> Result<web::HttpResponse, web::Error> {
    Err(errors::UserError::UrlNotFound.into())
}

/// Configures and starts the web server
async fn run_server(app_config: config::AppConfig) -> anyhow::Result<()> {
    let server_addr = ("0.0.0.0", app_config.web_server_port);

    let server = web::server(move || {
        web::App::new()
            .wrap(web::middleware::Logger::default())
            .state(api::AppState::new(app_config.clone()))
            .configure(api::routes::messaging)
            .configure(api::routes::account)
            .service((
                webhook::verify,
                webhook::receive,
                api::media::serve_media,
            ))
            .default_service(web::route().to(serve_not_found))
    });

    server
        .bind(server_addr)?
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {e}"))
}
