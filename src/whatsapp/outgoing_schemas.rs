//! # WhatsApp Outgoing Message Schemas
//!
//! This module contains data structures for sending messages to the WhatsApp
//! Business API. These schemas define the JSON payload structure for the
//! message types the relay supports.

use crate::consts;
use serde::{Deserialize, Serialize};

/// Text message to send to WhatsApp
#[derive(Debug, Serialize, Deserialize)]
pub struct OutgoingTextMessage {
    /// Messaging product, always "whatsapp"
    pub messaging_product: String,
    /// Recipient's WhatsApp ID (phone number)
    pub to: String,
    /// Message type
    #[serde(rename = "type")]
    pub msg_type: String,
    /// Text content
    pub text: OutgoingTextContent,
}

impl OutgoingTextMessage {
    /// Creates a new text message
    pub fn new(to: String, body: String) -> Self {
        Self {
            messaging_product: consts::MESSAGING_PRODUCT.to_string(),
            to,
            msg_type: "text".to_string(),
            text: OutgoingTextContent { body },
        }
    }
}

/// Text content for outgoing messages
#[derive(Debug, Serialize, Deserialize)]
pub struct OutgoingTextContent {
    /// Message body text
    pub body: String,
}

/// Template message to send to WhatsApp.
///
/// The relay always sends the `hello_world` template in its `en_US` locale.
#[derive(Debug, Serialize, Deserialize)]
pub struct OutgoingTemplateMessage {
    /// Messaging product, always "whatsapp"
    pub messaging_product: String,
    /// Recipient type, always "individual"
    pub recipient_type: String,
    /// Recipient's WhatsApp ID (phone number)
    pub to: String,
    /// Message type, "template"
    #[serde(rename = "type")]
    pub msg_type: String,
    /// Template content
    pub template: TemplateContent,
}

impl OutgoingTemplateMessage {
    /// Creates a new `hello_world` template message
    pub fn new(to: String) -> Self {
        Self {
            messaging_product: consts::MESSAGING_PRODUCT.to_string(),
            recipient_type: "individual".to_string(),
            to,
            msg_type: "template".to_string(),
            template: TemplateContent {
                name: consts::TEMPLATE_NAME.to_string(),
                language: TemplateLanguage {
                    code: consts::TEMPLATE_LANGUAGE_CODE.to_string(),
                },
            },
        }
    }
}

/// Template name and locale
#[derive(Debug, Serialize, Deserialize)]
pub struct TemplateContent {
    /// Template name registered with the business account
    pub name: String,
    /// Template language
    pub language: TemplateLanguage,
}

/// Template language selector
#[derive(Debug, Serialize, Deserialize)]
pub struct TemplateLanguage {
    /// Locale code, e.g. "en_US"
    pub code: String,
}

/// Supported media kinds for outgoing media messages.
///
/// A closed set: the kind selects both the `type` value and the field name
/// the media object is placed under, so request input never chooses an
/// arbitrary JSON field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Document,
    Sticker,
}

impl MediaKind {
    /// Wire name of the kind, also the outbound payload field name
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Document => "document",
            MediaKind::Sticker => "sticker",
        }
    }
}

/// Media message to send to WhatsApp.
///
/// Exactly one of the media fields is populated, matching `msg_type`.
#[derive(Debug, Serialize, Deserialize)]
pub struct OutgoingMediaMessage {
    /// Messaging product, always "whatsapp"
    pub messaging_product: String,
    /// Recipient's WhatsApp ID (phone number)
    pub to: String,
    /// Message type, mirrors the populated media field
    #[serde(rename = "type")]
    pub msg_type: MediaKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<MediaContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<MediaContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<MediaContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<MediaContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticker: Option<MediaContent>,
}

impl OutgoingMediaMessage {
    /// Creates a new media message with a hosted media link
    pub fn new(to: String, kind: MediaKind, link: String) -> Self {
        let mut message = Self {
            messaging_product: consts::MESSAGING_PRODUCT.to_string(),
            to,
            msg_type: kind,
            image: None,
            video: None,
            audio: None,
            document: None,
            sticker: None,
        };

        let content = Some(MediaContent { link });
        match kind {
            MediaKind::Image => message.image = content,
            MediaKind::Video => message.video = content,
            MediaKind::Audio => message.audio = content,
            MediaKind::Document => message.document = content,
            MediaKind::Sticker => message.sticker = content,
        }

        message
    }
}

/// Media content referenced by link
#[derive(Debug, Serialize, Deserialize)]
pub struct MediaContent {
    /// Publicly reachable URL of the media
    pub link: String,
}

/// Payload for registering a phone number for Cloud API usage
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterPayload {
    /// Messaging product, always "whatsapp"
    pub messaging_product: String,
    /// Two-step verification PIN
    pub pin: String,
}

impl RegisterPayload {
    pub fn new() -> Self {
        Self {
            messaging_product: consts::MESSAGING_PRODUCT.to_string(),
            pin: consts::REGISTRATION_PIN.to_string(),
        }
    }
}

impl Default for RegisterPayload {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_message_shape() {
        let message = OutgoingTextMessage::new("15551234567".to_string(), "hi".to_string());

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "messaging_product": "whatsapp",
                "to": "15551234567",
                "type": "text",
                "text": { "body": "hi" }
            })
        );
    }

    #[test]
    fn test_template_message_shape() {
        let message = OutgoingTemplateMessage::new("15551234567".to_string());

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "messaging_product": "whatsapp",
                "recipient_type": "individual",
                "to": "15551234567",
                "type": "template",
                "template": {
                    "name": "hello_world",
                    "language": { "code": "en_US" }
                }
            })
        );
    }

    #[test]
    fn test_media_message_image_field() {
        let message = OutgoingMediaMessage::new(
            "15551234567".to_string(),
            MediaKind::Image,
            "https://example.com/pic.png".to_string(),
        );

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "messaging_product": "whatsapp",
                "to": "15551234567",
                "type": "image",
                "image": { "link": "https://example.com/pic.png" }
            })
        );
    }

    #[test]
    fn test_media_message_document_field() {
        let message = OutgoingMediaMessage::new(
            "15551234567".to_string(),
            MediaKind::Document,
            "https://example.com/report.pdf".to_string(),
        );

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["type"], "document");
        assert_eq!(value["document"]["link"], "https://example.com/report.pdf");
        assert!(value.get("image").is_none());
    }

    #[test]
    fn test_media_kind_matches_field_name() {
        for kind in [
            MediaKind::Image,
            MediaKind::Video,
            MediaKind::Audio,
            MediaKind::Document,
            MediaKind::Sticker,
        ] {
            let message =
                OutgoingMediaMessage::new("1".to_string(), kind, "https://x".to_string());
            let value = serde_json::to_value(&message).unwrap();

            assert_eq!(value["type"], kind.as_str());
            assert_eq!(value[kind.as_str()]["link"], "https://x");
        }
    }

    #[test]
    fn test_media_kind_rejects_unknown_value() {
        let result = serde_json::from_value::<MediaKind>(json!("__proto__"));
        assert!(result.is_err());
    }

    #[test]
    fn test_register_payload_pin() {
        assert_eq!(
            serde_json::to_value(RegisterPayload::new()).unwrap(),
            json!({ "messaging_product": "whatsapp", "pin": "123456" })
        );
    }
}
