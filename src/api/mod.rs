//! # API Module
//!
//! Relay endpoints that forward JSON payloads to the WhatsApp Business API
//! and wrap the response in the local `{status, data}` envelope.
//!
//! ## Modules
//!
//! - [`account`] - Phone number registration, listing, and webhook subscription
//! - [`media`] - Static media file serving
//! - [`messages`] - Text, template, and media message sending
//! - [`routes`] - Route registration
//! - [`schemas`] - Request bodies and the response envelope

pub mod account;
pub mod media;
pub mod messages;
pub mod routes;
pub mod schemas;

use crate::{config::AppConfig, whatsapp::client::WhatsAppClient};

/// Shared per-worker state: the immutable configuration and the outbound
/// API client. Nothing in it is mutated after startup.
pub struct AppState {
    pub config: AppConfig,
    pub whatsapp_client: WhatsAppClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let whatsapp_client = WhatsAppClient::new(&config);
        Self {
            config,
            whatsapp_client,
        }
    }
}
