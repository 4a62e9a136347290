//! Request bodies accepted by the relay endpoints and the `{status, data}`
//! envelope wrapping every relayed response.
//!
//! Wire field names are camelCase (`phoneNumberId`, `mediaUrl`, `mediaType`)
//! to match the upstream consumer.

use crate::whatsapp::outgoing_schemas::MediaKind;
use serde::{Deserialize, Serialize};

/// Body for `POST /send-wpp-message`
#[derive(Debug, Deserialize)]
pub struct SendTextRequest {
    /// Recipient's WhatsApp ID (phone number)
    pub to: String,
    /// Message text
    pub text: String,
    /// Routing phone number ID; falls back to the configured default
    #[serde(rename = "phoneNumberId")]
    pub phone_number_id: Option<String>,
}

/// Body for `POST /send-template-message`
#[derive(Debug, Deserialize)]
pub struct SendTemplateRequest {
    /// Recipient's WhatsApp ID (phone number)
    pub to: String,
    /// Routing phone number ID; falls back to the configured default
    #[serde(rename = "phoneNumberId")]
    pub phone_number_id: Option<String>,
}

/// Body for `POST /send-wpp-media-message`
#[derive(Debug, Deserialize)]
pub struct SendMediaRequest {
    /// Recipient's WhatsApp ID (phone number)
    pub to: String,
    /// Publicly reachable URL of the media to send
    #[serde(rename = "mediaUrl")]
    pub media_url: String,
    /// Kind of media; an unknown value fails deserialization
    #[serde(rename = "mediaType")]
    pub media_type: MediaKind,
    /// Routing phone number ID; falls back to the configured default
    #[serde(rename = "phoneNumberId")]
    pub phone_number_id: Option<String>,
}

/// Body for `POST /register`. No default fallback here: registration always
/// targets an explicitly named phone number.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// WhatsApp Business phone number ID to register
    #[serde(rename = "phoneNumberId")]
    pub phone_number_id: String,
}

/// Body for `POST /phone-numbers` and `POST /subscribe`
#[derive(Debug, Deserialize)]
pub struct AccountRequest {
    /// WhatsApp Business account ID
    #[serde(rename = "accountId")]
    pub account_id: String,
}

/// Local success wrapper returned by every relay endpoint, regardless of
/// what the wrapped external call produced.
#[derive(Debug, Serialize)]
pub struct RelayEnvelope {
    pub status: &'static str,
    pub data: serde_json::Value,
}

impl RelayEnvelope {
    pub fn new(status: &'static str, data: serde_json::Value) -> Self {
        Self { status, data }
    }
}
