//! Outbound message endpoints
//!
//! Each handler builds one fixed-shape Graph API payload, issues a single
//! outbound call, and wraps whatever the API returned in the relay envelope.
//! The envelope is always a local 200; callers must inspect `data` to tell
//! an upstream error from a delivery acknowledgment.

use super::{AppState, schemas};
use crate::{
    errors,
    whatsapp::outgoing_schemas::{
        OutgoingMediaMessage, OutgoingTemplateMessage, OutgoingTextMessage,
    },
};
use log::info;
use ntex::web;

/// Sends a free-text message
#[web::post("/send-wpp-message")]
pub async fn send_text(
    body: web::types::Json<schemas::SendTextRequest>,
    state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let body = body.into_inner();
    let phone_number_id = state.config.routing_id(body.phone_number_id);

    info!("Sending WhatsApp message from phone number {phone_number_id}");

    let message = OutgoingTextMessage::new(body.to, body.text);
    let data = state
        .whatsapp_client
        .send_message(&phone_number_id, &message)
        .await
        .map_err(|e| errors::ServerError::ExternalServiceError(e.to_string()))?;

    Ok(web::HttpResponse::Ok().json(&schemas::RelayEnvelope::new("Message Sent", data)))
}

/// Sends the hello_world template message
#[web::post("/send-template-message")]
pub async fn send_template(
    body: web::types::Json<schemas::SendTemplateRequest>,
    state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let body = body.into_inner();
    let phone_number_id = state.config.routing_id(body.phone_number_id);

    info!("Sending WhatsApp template message from phone number {phone_number_id}");

    let message = OutgoingTemplateMessage::new(body.to);
    let data = state
        .whatsapp_client
        .send_message(&phone_number_id, &message)
        .await
        .map_err(|e| errors::ServerError::ExternalServiceError(e.to_string()))?;

    Ok(web::HttpResponse::Ok().json(&schemas::RelayEnvelope::new("Message Sent", data)))
}

/// Sends a media message referencing a hosted media link
#[web::post("/send-wpp-media-message")]
pub async fn send_media(
    body: web::types::Json<schemas::SendMediaRequest>,
    state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let body = body.into_inner();
    let phone_number_id = state.config.routing_id(body.phone_number_id);

    info!(
        "Sending WhatsApp {kind} message from phone number {phone_number_id}",
        kind = body.media_type.as_str()
    );

    let message = OutgoingMediaMessage::new(body.to, body.media_type, body.media_url);
    let data = state
        .whatsapp_client
        .send_message(&phone_number_id, &message)
        .await
        .map_err(|e| errors::ServerError::ExternalServiceError(e.to_string()))?;

    Ok(web::HttpResponse::Ok().json(&schemas::RelayEnvelope::new("Media Message Sent", data)))
}
