//! Account and phone-number management endpoints
//!
//! These share the senders' relay contract: one outbound call, response
//! wrapped verbatim in the envelope.

use super::{AppState, schemas};
use crate::errors;
use log::info;
use ntex::web;

/// Registers a phone number for Cloud API usage
#[web::post("/register")]
pub async fn register_phone_number(
    body: web::types::Json<schemas::RegisterRequest>,
    state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let data = state
        .whatsapp_client
        .register_phone_number(&body.phone_number_id)
        .await
        .map_err(|e| errors::ServerError::ExternalServiceError(e.to_string()))?;

    info!("Register phone number response: {data}");

    Ok(web::HttpResponse::Ok().json(&schemas::RelayEnvelope::new("Phone Number Registered", data)))
}

/// Lists the phone numbers attached to a business account
#[web::post("/phone-numbers")]
pub async fn list_phone_numbers(
    body: web::types::Json<schemas::AccountRequest>,
    state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let data = state
        .whatsapp_client
        .list_phone_numbers(&body.account_id)
        .await
        .map_err(|e| errors::ServerError::ExternalServiceError(e.to_string()))?;

    info!("Phone numbers response: {data}");

    Ok(web::HttpResponse::Ok().json(&schemas::RelayEnvelope::new("Phone Number fetched", data)))
}

/// Subscribes a business account to webhook events
#[web::post("/subscribe")]
pub async fn subscribe_account(
    body: web::types::Json<schemas::AccountRequest>,
    state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let data = state
        .whatsapp_client
        .subscribe_account(&body.account_id)
        .await
        .map_err(|e| errors::ServerError::ExternalServiceError(e.to_string()))?;

    info!("Subscribe response: {data}");

    Ok(web::HttpResponse::Ok().json(&schemas::RelayEnvelope::new(
        "Account subscribed to webhooks",
        data,
    )))
}
